//! The sample story shipped with the binary.

use super::{Choice, Story, TriggerPoint};

/// Build the bundled sample story.
///
/// Entries are deliberately not time-sorted (250 precedes 224, 352 precedes
/// 327) and some choices repeat their label. Both are valid tables.
pub(super) fn sample_story() -> Story {
    let t = |time: f64, links: &[(&str, f64)]| {
        TriggerPoint::new(
            time,
            links
                .iter()
                .map(|&(label, target)| Choice::new(label, target))
                .collect(),
        )
    };

    Story {
        title: Some("The Expedition".to_string()),
        duration: Some(420.0),
        tolerance: None,
        triggers: vec![
            t(25.0, &[("GO THROUGH", 35.0), ("GO AROUND", 66.0)]),
            t(65.0, &[("CONTINUE", 77.0)]),
            t(90.0, &[("INSPECT", 105.0), ("MOVE ON", 99.0)]),
            t(104.0, &[("CONTINUE", 133.0)]),
            t(145.0, &[("GRAB THE NOTE", 156.0), ("MOVE ON", 188.0)]),
            t(187.0, &[("CONTINUE", 197.0)]),
            t(204.0, &[("DIG", 214.0), ("MOVE ON", 225.0)]),
            t(250.0, &[("FORCE HER", 255.0), ("MOVE ON", 337.0)]),
            t(224.0, &[("CONTINUE", 228.0)]),
            t(352.0, &[("CONTINUE", 378.0), ("CONTINUE", 363.0)]),
            t(327.0, &[("CONTINUE", 378.0), ("CONTINUE", 363.0)]),
        ],
    }
}
