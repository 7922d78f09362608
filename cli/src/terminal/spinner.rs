use colored::*;
use fabmap_common::fabric::device::{Device, DeviceKind};
use fabmap_core::builder::ParseObserver;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS)
}

/// Mirrors parse progress onto the spinner attached to `span`.
pub struct ParseProgress {
    span: Span,
    hosts: usize,
    switches: usize,
}

impl ParseProgress {
    pub fn new(span: Span) -> Self {
        span.pb_set_style(&spinner_style());
        span.pb_set_message("Reading device blocks...");
        Self {
            span,
            hosts: 0,
            switches: 0,
        }
    }
}

impl ParseObserver for ParseProgress {
    fn block_parsed(&mut self, device: &Device) {
        match device.kind {
            DeviceKind::Host => self.hosts += 1,
            DeviceKind::Switch => self.switches += 1,
        }

        self.span.pb_set_message(&format!(
            "Parsed {} hosts and {} switches so far...",
            self.hosts.to_string().green().bold(),
            self.switches.to_string().green().bold()
        ));
    }
}
