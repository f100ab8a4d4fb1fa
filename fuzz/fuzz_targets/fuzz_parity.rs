#![no_main]

use hix::index::types::IndexConfig;
use hix::query::executor::Executor;
use hix::session::Session;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static SESSION: OnceLock<Session> = OnceLock::new();

fn session() -> &'static Session {
    SESSION.get_or_init(|| {
        Session::build(hix::corpus::embedded(), &IndexConfig::with_page_size(7)).unwrap()
    })
}

fuzz_target!(|data: &[u8]| {
    // Both strategies must agree on the page for any probe word
    if let Ok(word) = std::str::from_utf8(data) {
        let executor = Executor::new(session());
        let hash = executor.hash_lookup(word);
        let scan = executor.table_scan(word);
        assert_eq!(hash.page, scan.page);
    }
});
