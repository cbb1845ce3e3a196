//! SKZ Browser — a simulated tabbed browser shell with local search,
//! bookmarks, and history.
//!
//! Entry point: runs an interactive console demo walking each component.

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               SKZ Browser v{} — Demo Mode                ║", env!("CARGO_PKG_VERSION"));
    println!("║      Simulated browser shell with local search              ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_store();
    demo_tabs();
    demo_bookmarks();
    demo_history();
    demo_search();
    demo_view_flow();
    demo_settings();
    demo_downloads();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_store() {
    use skzbrowser::storage::LocalStore;
    section("Local Store");

    let store = LocalStore::open_in_memory().expect("Failed to open store");
    store.set("greeting", "hello").unwrap();
    println!("  set greeting -> {:?}", store.get("greeting").unwrap());

    store.remove("greeting").unwrap();
    println!("  removed greeting -> {:?}", store.get("greeting").unwrap());
    println!("  ✓ LocalStore OK");
    println!();
}

fn demo_tabs() {
    use skzbrowser::managers::tab_manager::{TabManager, TabManagerTrait};
    use skzbrowser::types::tab::TabPatch;
    section("Tab Manager");

    let mut mgr = TabManager::new();
    println!("  Initial tab: \"{}\" (count = {})", mgr.active_tab().title, mgr.tab_count());

    let t2 = mgr.new_tab();
    mgr.update_active(TabPatch {
        url: Some("https://github.com".to_string()),
        title: Some("GitHub".to_string()),
    });
    println!("  Opened second tab: {}", mgr.active_tab().url);

    mgr.close_tab(&t2);
    println!("  Closed it, active is now \"{}\"", mgr.active_tab().title);

    let last = mgr.active_tab_id().to_string();
    mgr.close_tab(&last);
    println!("  Closing the last tab is ignored: count = {}", mgr.tab_count());
    println!("  ✓ TabManager OK");
    println!();
}

fn demo_bookmarks() {
    use std::sync::Arc;
    use skzbrowser::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
    use skzbrowser::storage::LocalStore;
    section("Bookmark Registry");

    let store = Arc::new(LocalStore::open_in_memory().unwrap());
    let mut mgr = BookmarkManager::new(store).unwrap();
    println!("  Fresh profile seeded with {} bookmarks", mgr.bookmarks().len());

    let id = mgr.add("Rust", "https://rust-lang.org").unwrap();
    println!("  Added bookmark {} -> {} total", id, mgr.bookmarks().len());

    mgr.remove(&id).unwrap();
    println!("  Removed it -> {} total", mgr.bookmarks().len());
    println!("  ✓ BookmarkManager OK");
    println!();
}

fn demo_history() {
    use std::sync::Arc;
    use skzbrowser::managers::history_manager::{HistoryManager, HistoryManagerTrait};
    use skzbrowser::storage::LocalStore;
    section("History Log");

    let store = Arc::new(LocalStore::open_in_memory().unwrap());
    let mut mgr = HistoryManager::new(store).unwrap();

    mgr.record("https://github.com", "GitHub").unwrap();
    mgr.record("rust pagination", "rust pagination").unwrap();
    println!("  Recorded 2 visits, newest first: \"{}\"", mgr.entries()[0].title);

    for i in 0..60 {
        mgr.record(&format!("https://site-{}.com", i), "padding").unwrap();
    }
    println!("  After 60 more visits the log is capped at {}", mgr.entries().len());

    mgr.clear().unwrap();
    println!("  Cleared: {} entries", mgr.entries().len());
    println!("  ✓ HistoryManager OK");
    println!();
}

fn demo_search() {
    use skzbrowser::services::result_pager;
    use skzbrowser::services::search_provider::{SearchProvider, SyntheticSearchProvider};
    section("Search Provider + Result Pager");

    let provider = SyntheticSearchProvider::new();
    let results = provider.search("rust");
    println!("  Query \"rust\" -> {} synthetic results", results.len());

    let total = result_pager::total_pages(results.len(), result_pager::PAGE_SIZE);
    let page5 = result_pager::paginate(&results, 5, result_pager::PAGE_SIZE);
    println!("  {} pages of {}; page 5 holds ids {}..{}",
        total, result_pager::PAGE_SIZE, page5[0].id, page5[page5.len() - 1].id);

    let window = result_pager::visible_page_window(4, total, result_pager::PAGE_WINDOW);
    println!("  Page window around 4: {:?}", window);
    println!("  ✓ Search + pager OK");
    println!();
}

fn demo_view_flow() {
    use skzbrowser::managers::view_manager::{ViewManager, ViewManagerTrait};
    use skzbrowser::services::result_pager;
    use skzbrowser::types::view::ViewState;
    section("View Selector");

    let mut mgr = ViewManager::new(result_pager::PAGE_SIZE);
    println!("  Initial view: {:?}", mgr.view());

    mgr.submit_query("rust");
    println!("  Submitted query -> {:?}, page {}", mgr.view(), mgr.current_page());

    mgr.open_result("https://docs.rs/rust?r=1");
    println!("  Opened a result -> single preview: {}",
        matches!(mgr.view(), ViewState::SinglePreview(_)));

    mgr.submit_query("cats");
    println!("  New query closes the preview -> {:?}, page {}", mgr.view(), mgr.current_page());
    println!("  ✓ ViewManager OK");
    println!();
}

fn demo_settings() {
    use std::sync::Arc;
    use skzbrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    use skzbrowser::storage::LocalStore;
    section("Settings Engine");

    let store = Arc::new(LocalStore::open_in_memory().unwrap());
    let mut engine = SettingsEngine::new(store);
    let prefs = engine.load().unwrap();
    println!("  Homepage: {}", prefs.general.homepage);
    println!("  Search engine: {:?}", prefs.general.search_engine);
    println!("  Save history: {}", prefs.privacy.save_history);

    engine.set_value("privacy.block_ads", serde_json::json!(true)).unwrap();
    println!("  Enabled ad blocking: {}", engine.preferences().privacy.block_ads);

    engine.reset().unwrap();
    println!("  Reset to defaults: block_ads = {}", engine.preferences().privacy.block_ads);
    println!("  ✓ SettingsEngine OK");
    println!();
}

fn demo_downloads() {
    use skzbrowser::managers::download_manager::{DownloadManager, DownloadManagerTrait};
    section("Download Shelf");

    let mut mgr = DownloadManager::new();
    println!("  Seeded with {} records:", mgr.records().len());
    for record in mgr.records() {
        println!("    {} ({} bytes, {})", record.filename, record.size.unwrap_or(0), record.date);
    }

    mgr.remove("2");
    println!("  Removed one -> {} remaining", mgr.records().len());
    println!("  ✓ DownloadManager OK");
    println!();
}

fn demo_app_core() {
    use std::sync::Arc;
    use skzbrowser::app::App;
    use skzbrowser::managers::history_manager::HistoryManagerTrait;
    use skzbrowser::managers::view_manager::ViewManagerTrait;
    use skzbrowser::services::embedder::RecordingEmbedder;
    use skzbrowser::services::search_provider::SyntheticSearchProvider;
    use skzbrowser::storage::LocalStore;
    use skzbrowser::types::view::ViewState;
    section("App Core (full flow)");

    let store = Arc::new(LocalStore::open_in_memory().unwrap());
    let embedder = RecordingEmbedder::new();
    let mut app = App::with_parts(
        store,
        Box::new(SyntheticSearchProvider::new()),
        Box::new(embedder.clone()),
    )
    .unwrap();

    app.submit_address("https://github.com").unwrap();
    println!("  Direct URL opened externally: {:?}", embedder.opened());

    app.submit_address("rust pagination").unwrap();
    println!("  Query routed to search: {} results, page numbers {:?}",
        app.results().len(), app.page_numbers());

    app.change_page(5);
    println!("  Page 5 shows ids {}..{}",
        app.current_page_results()[0].id,
        app.current_page_results()[9].id);

    app.open_result(0);
    println!("  Opened a result inline -> preview = {}",
        matches!(app.view_manager.view(), ViewState::SinglePreview(_)));

    app.close_preview();
    app.go_home();
    println!("  Back home; history holds {} entries", app.history_manager.entries().len());
    println!("  ✓ App Core OK");
}
