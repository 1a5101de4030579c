// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for debounced transitions and browse suppression.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use proptest::prelude::*;
use understory_dropdown::adapters::arena::{ListenerTable, NodeArena, NodeId};
use understory_dropdown::dropdown::Dropdown;
use understory_dropdown::handler::Callbacks;
use understory_dropdown::options::{Config, Options};
use understory_dropdown::types::Region;

const DELAY_MS: u64 = 400;

struct Harness {
    tree: NodeArena,
    dropdown: Dropdown<NodeId, Callbacks<NodeId>>,
    opened: Rc<Cell<u32>>,
    closed: Rc<Cell<u32>>,
}

fn harness() -> Harness {
    let mut tree = NodeArena::new();
    let root = tree.insert(None);
    let trigger = tree.insert(Some(root));
    let menu = tree.insert(Some(root));
    let mut listeners = ListenerTable::new();

    let opened = Rc::new(Cell::new(0));
    let closed = Rc::new(Cell::new(0));
    let (o, c) = (opened.clone(), closed.clone());
    let handler = Callbacks::new()
        .on_open(move |_| o.set(o.get() + 1))
        .on_close(move |_| c.set(c.get() + 1));
    let delay = Duration::from_millis(DELAY_MS);
    let config = Config {
        region: Region {
            root,
            trigger,
            menu,
        },
        options: Options::new().with_debounce_delay(delay),
        handler,
    };
    let dropdown = Dropdown::new(config, &tree, &mut listeners).unwrap();
    Harness {
        tree,
        dropdown,
        opened,
        closed,
    }
}

proptest! {
    #[test]
    fn burst_of_opens_fires_once_after_last(gaps in prop::collection::vec(0..DELAY_MS, 1..20)) {
        let mut h = harness();
        let mut now = 0;
        for gap in &gaps {
            now += gap;
            h.dropdown.open(Duration::from_millis(now));
            // Nothing commits while the burst is still inside the window.
            h.dropdown.advance(&mut h.tree, Duration::from_millis(now));
            prop_assert!(!h.dropdown.is_opened());
        }
        let due = Duration::from_millis(now + DELAY_MS);
        prop_assert_eq!(h.dropdown.next_deadline(), Some(due));
        let early = due - Duration::from_millis(1);
        prop_assert_eq!(h.dropdown.advance(&mut h.tree, early), 0);
        prop_assert_eq!(h.dropdown.advance(&mut h.tree, due), 1);
        prop_assert!(h.dropdown.is_opened());
        prop_assert_eq!(h.opened.get(), 1);
    }

    #[test]
    fn browsing_blocks_every_close(attempts in 1..16_usize, debounced in any::<bool>()) {
        let mut h = harness();
        h.dropdown.open_now(&mut h.tree);
        h.dropdown.browse();
        for i in 0..attempts {
            if debounced {
                let t = Duration::from_millis(i as u64 * DELAY_MS);
                h.dropdown.close(t);
                h.dropdown.advance(&mut h.tree, t + Duration::from_millis(DELAY_MS));
            } else {
                prop_assert!(!h.dropdown.close_now(&mut h.tree));
            }
        }
        prop_assert!(h.dropdown.is_opened());
        prop_assert_eq!(h.closed.get(), 0);

        h.dropdown.end_browse();
        prop_assert!(h.dropdown.close_now(&mut h.tree));
        prop_assert_eq!(h.closed.get(), 1);
    }
}
