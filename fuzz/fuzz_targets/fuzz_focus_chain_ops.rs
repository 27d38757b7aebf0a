#![no_main]

//! Arbitrary request/release sequences, with any `usize` layer number, must
//! never panic and must keep the chain free of trailing empty layers.

use std::cell::Cell;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shellstack::{FocusChainConfig, Focusable, LayeredFocusStack};

#[derive(Debug, Arbitrary)]
enum Layer {
    Low(u8),
    Any(usize),
    Max,
    Unassigned,
}

impl Layer {
    fn number(&self) -> Option<usize> {
        match *self {
            Self::Low(n) => Some(usize::from(n % 8)),
            Self::Any(n) => Some(n),
            Self::Max => Some(usize::MAX),
            Self::Unassigned => None,
        }
    }
}

#[derive(Debug, Arbitrary)]
enum Op {
    Request { id: u8, layer: Layer },
    Release { id: u8, layer: Layer },
}

#[derive(Debug)]
struct Item {
    id: u8,
    layer: Option<usize>,
    focused: Cell<bool>,
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Focusable for Item {
    fn layer_number(&self) -> Option<usize> {
        self.layer
    }

    fn set_focused(&self, focused: bool) {
        self.focused.set(focused);
    }
}

fn item(id: u8, layer: &Layer) -> Item {
    Item {
        id,
        layer: layer.number(),
        focused: Cell::new(false),
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut chain = LayeredFocusStack::with_config(FocusChainConfig::default().log_chain(false));

    for op in ops {
        match op {
            Op::Request { id, layer } => chain.request_focus(item(id, &layer)),
            Op::Release { id, layer } => chain.release_focus(&item(id, &layer)),
        }

        match chain.top_layer() {
            Some(top_layer) => {
                let top = chain.layer(top_layer).unwrap_or_default();
                assert!(!top.is_empty(), "trailing empty layer");
                assert_eq!(chain.top_handle(), top.last());
                assert_eq!(chain.layer_count(), top_layer.saturating_add(1));
                assert!(chain.layer(top_layer.saturating_add(1)).is_none() || top_layer == usize::MAX);
            }
            None => {
                assert!(chain.top_handle().is_none());
                assert_eq!(chain.layer_count(), 0);
            }
        }
    }
});
