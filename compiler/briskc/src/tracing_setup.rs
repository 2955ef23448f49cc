//! Logging setup for the driver.
//!
//! Controlled by the environment:
//!
//! ```bash
//! BRISK_LOG=debug brisk lex main.bk                         # flat text
//! BRISK_LOG=brisk_lexer=trace BRISK_LOG_FORMAT=tree brisk lex main.bk
//! ```
//!
//! `BRISK_LOG` takes precedence over `RUST_LOG`. With neither set, no
//! subscriber is installed. All output goes to stderr.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

static TRACING_INIT: Once = Once::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Text,
    Tree,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("BRISK_LOG_FORMAT").as_deref() {
            Ok("tree") => LogFormat::Tree,
            _ => LogFormat::Text,
        }
    }
}

fn build_filter() -> EnvFilter {
    match std::env::var("BRISK_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os("BRISK_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
            return;
        }

        let filter = build_filter();
        match LogFormat::from_env() {
            LogFormat::Tree => {
                let tree = tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree).init();
            }
            LogFormat::Text => {
                let layer = fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr);
                Registry::default().with(filter).with(layer).init();
            }
        }
    });
}
