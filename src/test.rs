use std::collections::VecDeque;

use crate::assets::SpriteAsset;
use crate::battle::{
    BattleController, BattleTurn, RandomSource, SlideAnimator, SlidePhase, TurnEvent, TurnPhase,
};
use crate::battle::slide::{Axis, Travel};
use crate::battle::turn::{ATTACK_BACK_SECS, ATTACK_OUT_SECS, COOLDOWN_SECS, HIT_FLASH_SECS};
use crate::gui::hud::{back_slide, front_slide};
use crate::models::{AppSettings, Combatant, Slot};
use crate::utils::{clamp01, clock_text, parse_app_settings};

/// Deterministic random source: hands out queued damage rolls and always
/// picks index 0 from pools.
struct FixedRandom {
    rolls: VecDeque<u32>,
}

impl FixedRandom {
    fn new(rolls: &[u32]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }
}

impl RandomSource for FixedRandom {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        self.rolls
            .pop_front()
            .map(|v| v.clamp(low, high))
            .unwrap_or(low)
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 { None } else { Some(0) }
    }
}

fn one_asset_pool(name: &str) -> Vec<SpriteAsset> {
    vec![SpriteAsset {
        name: name.to_string(),
        texture: None,
    }]
}

fn test_controller(rolls: &[u32]) -> BattleController {
    let mut controller = BattleController::new(
        one_asset_pool("AZU"),
        one_asset_pool("BULBA"),
        front_slide(),
        back_slide(),
        Box::new(FixedRandom::new(rolls)),
    );
    // Let both entrance slides finish so a turn can play out cleanly.
    controller.update(0.5);
    assert!(controller.slot(Slot::Front).anim.is_idle());
    assert!(controller.slot(Slot::Back).anim.is_idle());
    controller
}

/// Drives the controller until the active turn finishes.
fn run_active_turn(controller: &mut BattleController) {
    assert!(controller.has_active_turn(), "expected a live turn to drive");
    for _ in 0..200 {
        controller.update(0.02);
        if !controller.has_active_turn() {
            return;
        }
    }
    panic!("turn did not finish within the step budget");
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_clamp01_bounds() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(0.0), 0.0);
    assert_eq!(clamp01(0.37), 0.37);
    assert_eq!(clamp01(1.0), 1.0);
    assert_eq!(clamp01(7.3), 1.0);
}

#[test]
fn test_clock_text_blinking_colon() {
    assert_eq!(clock_text(9, 5, true), "09:05");
    assert_eq!(clock_text(9, 5, false), "09 05");
    assert_eq!(clock_text(23, 59, true), "23:59");
}

#[test]
fn test_settings_swap_seconds_clamped() {
    let mut settings = AppSettings::default();
    settings.set_swap_seconds(0.2);
    assert_eq!(settings.swap_seconds, 1.0);
    settings.set_swap_seconds(10_000.0);
    assert_eq!(settings.swap_seconds, 600.0);
    settings.set_swap_seconds(45.0);
    assert_eq!(settings.swap_seconds, 45.0);
}

#[test]
fn test_settings_clamped_when_parsed_from_json() {
    // A hand-edited settings file must not smuggle in an out-of-range
    // interval: 0 would trigger a turn every frame.
    let settings = parse_app_settings(
        r#"{"assets_dir":"assets","font_file":"pkmn.ttf","swap_seconds":0.0}"#,
    );
    assert_eq!(settings.swap_seconds, 1.0);

    let settings = parse_app_settings(
        r#"{"assets_dir":"assets","font_file":"pkmn.ttf","swap_seconds":9999.0}"#,
    );
    assert_eq!(settings.swap_seconds, 600.0);

    // Malformed content degrades to the defaults.
    let settings = parse_app_settings("not json at all");
    assert_eq!(settings.swap_seconds, AppSettings::default().swap_seconds);
}

#[test]
fn test_slide_elapsed_never_exceeds_duration() {
    let mut anim = front_slide();
    anim.enter();
    for dt in [0.0, 0.05, 0.3, 0.0, 0.25, 1.0] {
        anim.update(dt);
        assert!(anim.elapsed() <= anim.duration());
    }
    assert_eq!(anim.phase(), SlidePhase::Idle);
}

#[test]
fn test_slide_goes_idle_exactly_at_duration() {
    let mut anim = front_slide();
    anim.enter();
    anim.update(0.2);
    assert_eq!(anim.phase(), SlidePhase::Entering);
    anim.update(0.2);
    assert_eq!(anim.phase(), SlidePhase::Idle);
    assert_eq!(anim.elapsed(), anim.duration());
}

#[test]
fn test_slide_round_trip_returns_to_base() {
    let base = (40.0, 80.0);
    let mut anim = SlideAnimator::new(
        base,
        (32.0, 32.0),
        Axis::X,
        Travel::Positive,
        0.4,
        (320.0, 240.0),
    );
    anim.enter();
    anim.update(1.0);
    assert_eq!(anim.position(), base);
    anim.exit();
    anim.update(1.0);
    assert_eq!(anim.phase(), SlidePhase::Idle);
    assert_eq!(anim.position(), base);
}

#[test]
fn test_slide_entering_starts_offscreen() {
    // Front slot drops in from above: at t=0 the sprite sits at -height.
    let mut anim = front_slide();
    anim.enter();
    let (x, y) = anim.position();
    assert_eq!(x, 180.0);
    assert_eq!(y, -152.0);
    // Halfway through it is halfway between the off-screen origin and base.
    anim.update(0.2);
    let (_, y) = anim.position();
    assert_close(y, (-152.0 + -30.0) / 2.0);
}

#[test]
fn test_slide_update_zero_is_noop() {
    let mut anim = back_slide();
    anim.enter();
    anim.update(0.15);
    let phase = anim.phase();
    let pos = anim.position();
    for _ in 0..10 {
        anim.update(0.0);
    }
    assert_eq!(anim.phase(), phase);
    assert_eq!(anim.position(), pos);
}

#[test]
fn test_turn_phase_order_is_strictly_forward() {
    let mut rng = FixedRandom::new(&[10]);
    let mut turn = BattleTurn::new(Slot::Front, &mut rng);
    assert_eq!(turn.defender, Slot::Back);
    turn.start();
    assert_eq!(turn.phase(), TurnPhase::AttackOut);

    let mut visited = vec![TurnPhase::AttackOut];
    let mut impacts = 0;
    let mut finishes = 0;
    for _ in 0..200 {
        match turn.update(0.01) {
            Some(TurnEvent::Impact) => {
                impacts += 1;
                assert_eq!(turn.phase(), TurnPhase::HitFlash);
            }
            Some(TurnEvent::Finished) => finishes += 1,
            None => {}
        }
        if visited.last() != Some(&turn.phase()) {
            visited.push(turn.phase());
        }
        if turn.done() {
            break;
        }
    }

    assert_eq!(
        visited,
        vec![
            TurnPhase::AttackOut,
            TurnPhase::AttackBack,
            TurnPhase::HitFlash,
            TurnPhase::Cooldown,
            TurnPhase::Idle,
        ]
    );
    assert_eq!(impacts, 1, "damage edge must fire exactly once");
    assert_eq!(finishes, 1);
}

#[test]
fn test_turn_start_outside_idle_is_noop() {
    let mut rng = FixedRandom::new(&[10]);
    let mut turn = BattleTurn::new(Slot::Back, &mut rng);
    turn.start();
    turn.update(0.05);
    let phase = turn.phase();
    let offset = turn.offset_x();
    turn.start();
    assert_eq!(turn.phase(), phase);
    assert_eq!(turn.offset_x(), offset);
}

#[test]
fn test_turn_lunge_offset_shape() {
    let mut rng = FixedRandom::new(&[10]);
    let mut turn = BattleTurn::new(Slot::Front, &mut rng);
    turn.start();
    // Quadratic ease-in: halfway through attack-out the offset is a quarter
    // of the full lunge.
    turn.update(ATTACK_OUT_SECS / 2.0);
    assert_close(turn.offset_x(), 28.0 * 0.25);
    turn.update(ATTACK_OUT_SECS / 2.0);
    assert_eq!(turn.phase(), TurnPhase::AttackBack);
    // Ease-out back: offset returns to zero by the end of attack-back.
    turn.update(ATTACK_BACK_SECS / 2.0);
    assert_close(turn.offset_x(), 28.0 * 0.25);
    let event = turn.update(ATTACK_BACK_SECS / 2.0);
    assert_eq!(event, Some(TurnEvent::Impact));
    assert_eq!(turn.offset_x(), 0.0);
}

#[test]
fn test_turn_flash_toggles_and_ends_off() {
    let mut rng = FixedRandom::new(&[10]);
    let mut turn = BattleTurn::new(Slot::Front, &mut rng);
    turn.start();
    // Skip through the lunge to the impact edge.
    turn.update(ATTACK_OUT_SECS);
    let event = turn.update(ATTACK_BACK_SECS);
    assert_eq!(event, Some(TurnEvent::Impact));
    assert!(turn.flash_on(), "first flash slice starts lit");

    let slice = HIT_FLASH_SECS / 6.0;
    let mut toggles = 0;
    let mut last = turn.flash_on();
    // Sample well inside each slice to avoid boundary jitter.
    for _ in 0..16 {
        turn.update(slice / 2.0);
        if turn.phase() != TurnPhase::HitFlash {
            break;
        }
        if turn.flash_on() != last {
            toggles += 1;
            last = turn.flash_on();
        }
    }
    assert!(toggles >= 4, "flash should alternate, saw {} toggles", toggles);
    assert_eq!(turn.phase(), TurnPhase::Cooldown);
    assert!(!turn.flash_on(), "flash is forced off after the flash window");

    turn.update(COOLDOWN_SECS);
    assert!(turn.done());
}

#[test]
fn test_turn_update_while_idle_is_noop() {
    let mut rng = FixedRandom::new(&[10]);
    let mut turn = BattleTurn::new(Slot::Front, &mut rng);
    // Not started yet: updates must not move the timer or produce events.
    assert_eq!(turn.update(1.0), None);
    assert_eq!(turn.phase(), TurnPhase::Idle);
    assert_eq!(turn.offset_x(), 0.0);

    // Run the whole turn, then keep ticking past the end.
    turn.start();
    for _ in 0..200 {
        turn.update(0.02);
        if turn.done() {
            break;
        }
    }
    assert!(turn.done());
    assert_eq!(turn.update(1.0), None);
    assert_eq!(turn.phase(), TurnPhase::Idle);
    assert!(!turn.flash_on());
}

#[test]
fn test_max_roll_leaves_defender_at_082() {
    let mut controller = test_controller(&[18]);
    controller.start_turn();
    run_active_turn(&mut controller);

    let front = controller.combatant(Slot::Front).unwrap();
    let back = controller.combatant(Slot::Back).unwrap();
    assert_eq!(front.hp, 1.0, "attacker health must be untouched");
    assert_close(back.hp, 0.82);
    assert_eq!(controller.turn_side(), Slot::Back, "turn passes to the defender");
}

#[test]
fn test_defeat_marks_pending_replacement_and_exits() {
    let mut controller = test_controller(&[18]);
    controller
        .slot_mut(Slot::Back)
        .combatant
        .as_mut()
        .unwrap()
        .hp = 0.05;

    controller.start_turn();
    run_active_turn(&mut controller);

    let back = controller.combatant(Slot::Back).unwrap();
    assert_eq!(back.hp, 0.0, "health is clamped at zero");
    assert_eq!(controller.pending_replacement(), Some(Slot::Back));
    assert_eq!(
        controller.slot(Slot::Back).anim.phase(),
        SlidePhase::Exiting
    );
    // Winner is restored to full and acts next.
    assert_eq!(controller.combatant(Slot::Front).unwrap().hp, 1.0);
    assert_eq!(controller.turn_side(), Slot::Front);

    // No new turn can start while the loser is sliding out.
    controller.start_turn();
    assert!(!controller.has_active_turn());

    // Once the exit slide finishes a fresh pick slides back in at full
    // health.
    controller.update(0.5);
    assert_eq!(controller.pending_replacement(), None);
    let replacement = controller.combatant(Slot::Back).unwrap();
    assert_eq!(replacement.hp, 1.0);
    assert_eq!(
        controller.slot(Slot::Back).anim.phase(),
        SlidePhase::Entering
    );
}

#[test]
fn test_double_defeat_tie_break_favors_back() {
    let mut controller = test_controller(&[6]);
    // Both sides already drained: whoever the turn knocks out, the front is
    // checked first, so the back side takes the win.
    controller
        .slot_mut(Slot::Front)
        .combatant
        .as_mut()
        .unwrap()
        .hp = 0.0;
    controller
        .slot_mut(Slot::Back)
        .combatant
        .as_mut()
        .unwrap()
        .hp = 0.0;

    controller.start_turn();
    run_active_turn(&mut controller);

    assert_eq!(controller.pending_replacement(), Some(Slot::Front));
    assert_eq!(controller.turn_side(), Slot::Back);
    assert_eq!(
        controller.slot(Slot::Front).anim.phase(),
        SlidePhase::Exiting
    );
    // The surviving side is restored to full.
    assert_eq!(controller.combatant(Slot::Back).unwrap().hp, 1.0);
}

#[test]
fn test_empty_pool_skips_replacement() {
    let mut controller = BattleController::new(
        one_asset_pool("AZU"),
        Vec::new(),
        front_slide(),
        back_slide(),
        Box::new(FixedRandom::new(&[18])),
    );
    controller.update(0.5);
    assert!(controller.combatant(Slot::Back).is_none());

    // Drop a combatant into the empty-pool slot by hand and let it lose.
    controller.slot_mut(Slot::Back).combatant = Some(Combatant::new("GHOST".to_string(), None));
    controller
        .slot_mut(Slot::Back)
        .combatant
        .as_mut()
        .unwrap()
        .hp = 0.05;
    controller.start_turn();
    run_active_turn(&mut controller);
    assert_eq!(controller.pending_replacement(), Some(Slot::Back));

    controller.update(0.5);
    assert_eq!(controller.pending_replacement(), None);
    assert!(
        controller.combatant(Slot::Back).is_none(),
        "empty pool leaves the slot unset"
    );
}

#[test]
fn test_double_start_turn_creates_one_sequence() {
    let mut controller = test_controller(&[18, 18]);
    controller.start_turn();
    controller.start_turn();
    assert!(controller.has_active_turn());
    run_active_turn(&mut controller);

    // Had a second sequence been created, a second 18 roll would have
    // landed too.
    let back = controller.combatant(Slot::Back).unwrap();
    assert_close(back.hp, 0.82);
}

#[test]
fn test_turn_order_flips_without_defeat() {
    let mut controller = test_controller(&[6, 6]);
    assert_eq!(controller.turn_side(), Slot::Front);

    controller.start_turn();
    run_active_turn(&mut controller);
    assert_eq!(controller.turn_side(), Slot::Back);
    assert_close(controller.combatant(Slot::Back).unwrap().hp, 0.94);

    controller.start_turn();
    run_active_turn(&mut controller);
    assert_eq!(controller.turn_side(), Slot::Front);
    assert_close(controller.combatant(Slot::Front).unwrap().hp, 0.94);
}

#[test]
fn test_controller_update_zero_is_noop() {
    let mut controller = test_controller(&[12]);
    controller.start_turn();
    controller.update(0.05);

    let phase = controller.active_phase();
    let front_pos = controller.slot(Slot::Front).anim.position();
    let back_hp = controller.combatant(Slot::Back).unwrap().hp;
    for _ in 0..10 {
        controller.update(0.0);
    }
    assert_eq!(controller.active_phase(), phase);
    assert_eq!(controller.slot(Slot::Front).anim.position(), front_pos);
    assert_eq!(controller.combatant(Slot::Back).unwrap().hp, back_hp);
}

#[test]
fn test_list_sprite_files_missing_dir_is_empty() {
    let files = crate::assets::list_sprite_files(std::path::Path::new("no_such_folder_here"));
    assert!(files.is_empty());
}

#[test]
fn test_name_labels_missing_file_is_empty() {
    let labels = crate::assets::load_name_labels(std::path::Path::new("no_such_folder_here"));
    assert!(labels.is_empty());
}
