// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-mode dropdown driven by raw pointer positions.
//!
//! Options are read from JSON, pointer positions are turned into enter/leave
//! events by `PointerTracker`, and a simulated clock drives debounced
//! transitions.
//!
//! Run:
//! - `RUST_LOG=understory_dropdown=trace cargo run -p understory_demos --example dropdown_hover`

use std::time::Duration;

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_dropdown::adapters::arena::{ListenerTable, NodeArena};
use understory_dropdown::adapters::pointer::{PointerTracker, RegionBounds};
use understory_dropdown::dropdown::Dropdown;
use understory_dropdown::options::{Config, Options};
use understory_dropdown::types::Region;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options: Options =
        serde_json::from_str(r#"{ "open_trigger": "hover", "debounce_delay_ms": 200 }"#)
            .expect("valid options");

    let mut tree = NodeArena::new();
    let root = tree.insert(None);
    let trigger = tree.insert(Some(root));
    let menu = tree.insert(Some(root));
    let region = Region {
        root,
        trigger,
        menu,
    };

    let mut listeners = ListenerTable::new();
    let config = Config::new(region).with_options(options);
    let mut dropdown = Dropdown::new(config, &tree, &mut listeners).expect("valid region");

    let bounds = RegionBounds {
        trigger: Rect::new(0.0, 0.0, 120.0, 24.0),
        menu: Rect::new(0.0, 24.0, 120.0, 160.0),
    };
    let mut pointer = PointerTracker::new();

    // (time in ms, pointer position)
    let moves = [
        (0, Some(Point::new(10.0, 10.0))),
        (250, Some(Point::new(10.0, 40.0))),
        (300, Some(Point::new(10.0, 80.0))),
        (900, Some(Point::new(300.0, 300.0))),
        (1_200, None),
    ];

    for (t, pt) in moves {
        let now = Duration::from_millis(t);
        dropdown.advance(&mut tree, now);
        for event in pointer.update(&region, &bounds, pt) {
            println!("t={t:>5}ms {:?} on {:?}", event.kind, event.target);
            dropdown.handle_event(&mut tree, &event, now);
        }
        if let Some(due) = dropdown.next_deadline() {
            println!("          next deadline at {}ms", due.as_millis());
        }
        println!(
            "          opened={} browsing={}",
            dropdown.is_opened(),
            dropdown.is_browsing()
        );
    }

    dropdown.advance(&mut tree, Duration::from_secs(2));
    println!("final: opened={}", dropdown.is_opened());
    assert!(!dropdown.is_opened());
}
