//! `init_tracing` next to a subscriber the host application installed first

use tracing::subscriber::set_global_default;

#[test]
fn test_init_tracing_keeps_existing_subscriber() {
    set_global_default(tracing_subscriber::registry()).expect("first global subscriber");

    scenario::init_tracing("debug");
    scenario::init_tracing("trace");

    let tokens = scenario::scenario::tokenize("@wait(1)").unwrap();
    assert_eq!(tokens.len(), 4);
}
