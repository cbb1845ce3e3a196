use skzbrowser::managers::tab_manager::{TabManager, TabManagerTrait, NEW_TAB_TITLE};
use skzbrowser::types::tab::TabPatch;

#[test]
fn test_initial_tab_exists_and_is_active() {
    let mgr = TabManager::new();
    assert_eq!(mgr.tab_count(), 1);
    let active = mgr.active_tab();
    assert_eq!(active.title, NEW_TAB_TITLE);
    assert_eq!(active.url, "");
    assert_eq!(active.id, mgr.active_tab_id());
}

#[test]
fn test_new_tab_appends_and_becomes_active() {
    let mut mgr = TabManager::new();
    let first = mgr.active_tab_id().to_string();
    let id = mgr.new_tab();
    assert_ne!(id, first);
    assert_eq!(mgr.tab_count(), 2);
    assert_eq!(mgr.active_tab_id(), id);
    // Appended at the end of the set
    assert_eq!(mgr.all_tabs()[1].id, id);
}

#[test]
fn test_new_tab_ids_are_unique() {
    let mut mgr = TabManager::new();
    let a = mgr.new_tab();
    let b = mgr.new_tab();
    let c = mgr.new_tab();
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn test_close_sole_tab_is_ignored() {
    let mut mgr = TabManager::new();
    let id = mgr.active_tab_id().to_string();
    mgr.close_tab(&id);
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.active_tab_id(), id);
}

#[test]
fn test_close_active_tab_activates_first_remaining() {
    let mut mgr = TabManager::new();
    let first = mgr.active_tab_id().to_string();
    let second = mgr.new_tab();
    let third = mgr.new_tab();

    mgr.set_active(&second);
    mgr.close_tab(&second);

    assert_eq!(mgr.tab_count(), 2);
    // Active becomes the tab at index 0 after removal
    assert_eq!(mgr.active_tab_id(), first);
    assert!(mgr.get_tab(&third).is_some());
    assert!(mgr.get_tab(&second).is_none());
}

#[test]
fn test_close_inactive_tab_keeps_active() {
    let mut mgr = TabManager::new();
    let first = mgr.active_tab_id().to_string();
    let second = mgr.new_tab();
    mgr.set_active(&first);

    mgr.close_tab(&second);
    assert_eq!(mgr.active_tab_id(), first);
    assert_eq!(mgr.tab_count(), 1);
}

#[test]
fn test_close_unknown_tab_is_ignored() {
    let mut mgr = TabManager::new();
    mgr.new_tab();
    mgr.close_tab("nonexistent");
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_set_active_switches() {
    let mut mgr = TabManager::new();
    let first = mgr.active_tab_id().to_string();
    mgr.new_tab();
    mgr.set_active(&first);
    assert_eq!(mgr.active_tab_id(), first);
}

#[test]
fn test_set_active_unknown_id_is_ignored() {
    let mut mgr = TabManager::new();
    let active = mgr.active_tab_id().to_string();
    mgr.set_active("nonexistent");
    assert_eq!(mgr.active_tab_id(), active);
}

#[test]
fn test_update_active_patches_active_tab_only() {
    let mut mgr = TabManager::new();
    let first = mgr.active_tab_id().to_string();
    let second = mgr.new_tab();

    mgr.update_active(TabPatch {
        url: Some("https://github.com".to_string()),
        title: Some("GitHub".to_string()),
    });

    let active = mgr.get_tab(&second).unwrap();
    assert_eq!(active.url, "https://github.com");
    assert_eq!(active.title, "GitHub");

    let other = mgr.get_tab(&first).unwrap();
    assert_eq!(other.url, "");
    assert_eq!(other.title, NEW_TAB_TITLE);
}

#[test]
fn test_update_active_partial_patch_leaves_other_field() {
    let mut mgr = TabManager::new();
    mgr.update_active(TabPatch {
        url: Some("https://rust-lang.org".to_string()),
        title: None,
    });
    let active = mgr.active_tab();
    assert_eq!(active.url, "https://rust-lang.org");
    assert_eq!(active.title, NEW_TAB_TITLE);
}
