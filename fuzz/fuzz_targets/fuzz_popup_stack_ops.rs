#![no_main]

//! Arbitrary popup operations: every view is destroyed at most once and the
//! stack never holds two entries for one source.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shellstack::{PopupConfig, PopupSource, PopupStack, PopupView};

#[derive(Debug, Arbitrary)]
enum Op {
    Add { source: u8, construct: bool },
    Remove { source: u8 },
    GiveFocus,
    CloseAll,
}

#[derive(Debug, PartialEq)]
struct Source(u8);

impl PopupSource for Source {
    fn close(&self) {}
}

#[derive(Debug)]
struct View {
    source: u8,
    destroyed: Rc<RefCell<Vec<u8>>>,
}

impl PopupView for View {
    fn set_focused(&self, _focused: bool) {}

    fn destroy(self) {
        self.destroyed.borrow_mut().push(self.source);
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let destroyed = Rc::new(RefCell::new(Vec::new()));
    let mut popups = PopupStack::with_config(PopupConfig::default());
    let mut live: HashSet<u8> = HashSet::new();

    for op in ops {
        match op {
            Op::Add { source, construct } => {
                let added = popups.add_popup(
                    |_: &(), s: &Source| {
                        construct.then(|| View {
                            source: s.0,
                            destroyed: Rc::clone(&destroyed),
                        })
                    },
                    &(),
                    Source(source),
                );
                assert_eq!(added, construct && live.insert(source));
            }
            Op::Remove { source } => {
                let before = destroyed.borrow().len();
                let remaining = popups.remove_popup(&Source(source));
                let was_live = live.remove(&source);
                assert_eq!(destroyed.borrow().len(), before + usize::from(was_live));
                assert_eq!(remaining, live.len());
            }
            Op::GiveFocus => popups.give_focus(),
            Op::CloseAll => popups.close_all_popups(),
        }
        assert_eq!(popups.len(), live.len());
    }
});
