// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-mode dropdown with selection and outside dismissal.
//!
//! Run:
//! - `RUST_LOG=understory_dropdown=debug cargo run -p understory_demos --example dropdown_click`

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_dropdown::adapters::arena::{ListenerTable, NodeArena};
use understory_dropdown::dropdown::Dropdown;
use understory_dropdown::handler::{Callbacks, SelectAction};
use understory_dropdown::options::Config;
use understory_dropdown::types::{DropdownEvent, Markers, Outcome, Region, Surface};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // body ─┬─ root ─┬─ trigger
    //       │        └─ menu ─┬─ cut
    //       │                 ├─ copy
    //       │                 └─ paste (disabled)
    //       └─ canvas
    let mut tree = NodeArena::new();
    let body = tree.insert(None);
    let root = tree.insert(Some(body));
    let trigger = tree.insert(Some(root));
    let menu = tree.insert(Some(root));
    let cut = tree.insert(Some(menu));
    let copy = tree.insert(Some(menu));
    let paste = tree.insert(Some(menu));
    let canvas = tree.insert(Some(body));
    tree.set_marker(&paste, Markers::DISABLED, true);

    let handler = Callbacks::new()
        .on_open(|_| println!("  -> opened"))
        .on_close(|_| println!("  -> closed"))
        .on_select(move |_, item| {
            println!("  -> selected {item:?}");
            if item == cut {
                SelectAction::Close
            } else {
                SelectAction::Keep
            }
        });

    let mut listeners = ListenerTable::new();
    let config = Config::new(Region {
        root,
        trigger,
        menu,
    })
    .with_handler(handler);
    let mut dropdown = Dropdown::new(config, &tree, &mut listeners).expect("valid region");
    println!("bound {} listeners", listeners.len());

    let script = [
        ("click trigger", trigger),
        ("click copy", copy),
        ("click paste (disabled)", paste),
        ("click canvas", canvas),
        ("click trigger", trigger),
        ("click cut", cut),
    ];
    for (i, (label, target)) in script.into_iter().enumerate() {
        let now = Duration::from_millis(i as u64 * 100);
        println!("== {label} ==");
        let outcome = dropdown.handle_event(&mut tree, &DropdownEvent::activate(target), now);
        if outcome == Outcome::Stop {
            println!("  (propagation stopped)");
        }
        println!(
            "  opened={} expanded_marker={}",
            dropdown.is_opened(),
            tree.has_marker(&root, Markers::EXPANDED)
        );
    }

    let removed = dropdown.destroy(&mut listeners).expect("first destroy");
    println!("released {removed} listeners, {} left", listeners.len());
    assert!(listeners.is_empty());
}
