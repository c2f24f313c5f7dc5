//! `init_tracing` next to a subscriber the host installed first.
//!
//! Runs in its own test binary: it sets `RUST_LOG` and the process-wide
//! default subscriber.

use kon_eval::{init_tracing, render, EvalContext, LiteralNode, Rendered};

#[test]
fn host_subscriber_is_kept() {
    let host = tracing_subscriber::registry();
    assert!(tracing::subscriber::set_global_default(host).is_ok());
    std::env::set_var("RUST_LOG", "kon_eval=trace");

    init_tracing();
    init_tracing();

    assert!(tracing::dispatcher::has_been_set());
    let rendered = render(&LiteralNode::string("ok"), &mut EvalContext::new());
    assert_eq!(rendered.ok(), Some(Rendered::Complete("ok".to_owned())));
}
