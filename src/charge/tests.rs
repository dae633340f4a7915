// Registry and induction tests for the charge arena

use ultraviolet::Vec2;

use crate::balloon::Balloon;
use crate::config::{self, BalloonSign, SimConfig};
use crate::layout::Layout;

use super::{induction, registry};
use super::{Charge, ChargeState, Polarity, Site};

#[test]
fn grid_has_expected_shape() {
    fastrand::seed(11);
    let layout = Layout::default();
    let config = SimConfig::default();
    let charges = registry::init_charges(&layout, &config);

    assert_eq!(
        charges.len(),
        layout.rows * layout.cols + 2 * config::WALL_PAIRS
    );
    assert!(charges.iter().all(|c| c.state == ChargeState::Idle));
    assert!(charges.iter().all(|c| c.anim == c.pos));

    let sweater = charges.iter().filter(|c| c.site == Site::Sweater).count();
    assert_eq!(sweater, layout.rows * layout.cols);
    for c in charges.iter().filter(|c| c.site == Site::Sweater) {
        assert!(c.pos.x >= layout.sweater.x && c.pos.x <= layout.sweater.x + layout.sweater.w);
        assert!(c.pos.y >= layout.sweater.y && c.pos.y <= layout.sweater.y + layout.sweater.h);
    }
}

#[test]
fn ids_are_unique_across_reinits() {
    let layout = Layout::default();
    let config = SimConfig::default();
    let first = registry::init_charges(&layout, &config);
    let second = registry::init_charges(&layout, &config);
    for c in &first {
        assert!(second.iter().all(|d| d.id != c.id));
    }
}

#[test]
fn candidates_are_exactly_idle_negative_sweater_charges() {
    fastrand::seed(12);
    let layout = Layout::default();
    let config = SimConfig::default();
    let charges = registry::init_charges(&layout, &config);

    let expected: Vec<usize> = charges
        .iter()
        .enumerate()
        .filter(|(_, c)| {
            c.site == Site::Sweater && c.sign == Polarity::Negative && c.state == ChargeState::Idle
        })
        .map(|(i, _)| i)
        .collect();
    assert_eq!(registry::idle_negative_indices(&charges), expected);

    for c in charges.iter().filter(|c| c.site == Site::Wall) {
        assert!(!c.is_transfer_candidate(), "wall charges never transfer");
    }
}

#[test]
fn nearest_candidate_breaks_ties_by_registry_order() {
    let charges = vec![
        Charge::new(Vec2::new(-10.0, 0.0), Polarity::Negative, false, Site::Sweater),
        Charge::new(Vec2::new(10.0, 0.0), Polarity::Negative, false, Site::Sweater),
    ];
    assert_eq!(
        registry::nearest_idle_negative(&charges, Vec2::zero()),
        Some(0)
    );
    assert_eq!(
        registry::nearest_idle_negative(&charges, Vec2::new(8.0, 0.0)),
        Some(1)
    );
    assert_eq!(registry::nearest_idle_negative(&[], Vec2::zero()), None);
}

#[test]
fn mobile_fraction_zero_keeps_animation_at_rest() {
    fastrand::seed(13);
    let layout = Layout::default();
    let mut config = SimConfig::default();
    config.mobile_fraction = 0.0;
    config.balloon_magnitude = config::BALLOON_MAGNITUDE_MAX;
    let mut charges = registry::init_charges(&layout, &config);

    // Park the balloon right on top of a site; nothing may move.
    let balloon = Balloon::new(charges[0].pos + Vec2::new(30.0, -30.0), config::BALLOON_RADIUS);
    for _ in 0..240 {
        induction::apply_induction(&mut charges, &balloon, &config, 16.0);
    }
    assert!(charges.iter().all(|c| c.anim == c.pos));
}

#[test]
fn induction_displaces_then_relaxes() {
    let config = SimConfig::default();
    let mut charges = vec![Charge::new(
        Vec2::zero(),
        Polarity::Positive,
        true,
        Site::Sweater,
    )];

    // A negative balloon 100 px away pulls the positive site toward it.
    let near = Balloon::new(Vec2::new(100.0, 0.0), config::BALLOON_RADIUS);
    for _ in 0..120 {
        induction::apply_induction(&mut charges, &near, &config, 16.0);
    }
    assert!(
        charges[0].anim.x > 5.0,
        "opposite polarity should be drawn toward the balloon, got {}",
        charges[0].anim.x
    );

    // Once the balloon leaves the influence radius the site relaxes home.
    let far = Balloon::new(Vec2::new(1000.0, 0.0), config::BALLOON_RADIUS);
    for _ in 0..240 {
        induction::apply_induction(&mut charges, &far, &config, 16.0);
    }
    assert!(charges[0].anim.x.abs() < 0.5);
}

#[test]
fn same_polarity_is_pushed_away() {
    let config = SimConfig::default();
    let mut charges = vec![Charge::new(
        Vec2::zero(),
        Polarity::Negative,
        true,
        Site::Sweater,
    )];
    let balloon = Balloon::new(Vec2::new(100.0, 0.0), config::BALLOON_RADIUS);
    for _ in 0..120 {
        induction::apply_induction(&mut charges, &balloon, &config, 16.0);
    }
    assert!(charges[0].anim.x < -5.0);
}

#[test]
fn neutral_uncharged_balloon_disturbs_nothing() {
    let mut config = SimConfig::default();
    config.balloon_sign = BalloonSign::Neutral;
    let mut charges = vec![Charge::new(
        Vec2::zero(),
        Polarity::Positive,
        true,
        Site::Sweater,
    )];
    let balloon = Balloon::new(Vec2::new(60.0, 0.0), config::BALLOON_RADIUS);
    for _ in 0..120 {
        induction::apply_induction(&mut charges, &balloon, &config, 16.0);
    }
    assert_eq!(charges[0].anim, charges[0].pos);
}

#[test]
fn induction_never_touches_state() {
    fastrand::seed(14);
    let layout = Layout::default();
    let mut config = SimConfig::default();
    config.mobile_fraction = 1.0;
    let mut charges = registry::init_charges(&layout, &config);
    let balloon = Balloon::new(layout.substrate_anchor(), config::BALLOON_RADIUS);
    for _ in 0..60 {
        induction::apply_induction(&mut charges, &balloon, &config, 16.0);
    }
    assert!(charges.iter().all(|c| c.state == ChargeState::Idle));
}
