use tracing_subscriber::{
    filter::LevelFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    Layer,
};

/// Initialize log printing for build scripts and dev tooling
pub fn init_traces() {
    #[cfg(debug_assertions)]
    let fmt_layer = fmt::Layer::default().with_filter(LevelFilter::DEBUG);
    #[cfg(not(debug_assertions))]
    let fmt_layer = fmt::Layer::default().with_filter(LevelFilter::INFO);
    tracing_subscriber::registry().with(fmt_layer).init();
}
