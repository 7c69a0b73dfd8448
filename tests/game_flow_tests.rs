//! Game Flow Integration Tests
//!
//! Tests for full sessions driven through the public controller API:
//! - Turn alternation across several moves
//! - Capture bookkeeping
//! - Randomized click streams that must never break the session invariants

use boardsim::game::{ClickOutcome, Controller};
use move_engine::{Side, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(controller: &mut Controller, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        controller.click(sq(from));
        let outcome = controller.click(sq(to));
        assert!(
            matches!(outcome, ClickOutcome::Moved { .. }),
            "{from}-{to} should be playable, got {outcome:?}"
        );
    }
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_light_moves_first() {
    let controller = Controller::new();
    assert_eq!(controller.side_to_move(), Side::Light);
    assert_eq!(controller.turn().move_number, 1);
}

#[test]
fn test_sides_alternate_over_a_short_game() {
    let mut controller = Controller::new();

    play(
        &mut controller,
        &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4")],
    );

    assert_eq!(controller.side_to_move(), Side::Dark);
    assert_eq!(controller.turn().move_number, 3);
    assert_eq!(controller.board().count(Side::Light), 16);
    assert_eq!(controller.board().count(Side::Dark), 16);
}

#[test]
fn test_opening_knight_hop() {
    //! Knights jump over the pawn wall from the start
    let mut controller = Controller::new();
    controller.click(sq("b1"));

    let reachable: Vec<Square> = controller.reachable().iter().collect();
    assert_eq!(reachable, vec![sq("a3"), sq("c3")]);
}

// ============================================================================
// Capture Tests
// ============================================================================

#[test]
fn test_exchange_on_d5() {
    let mut controller = Controller::new();

    play(
        &mut controller,
        &[("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("d8", "d5")],
    );

    let captured = controller.captured();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured.by_side(Side::Light).count(), 1);
    assert_eq!(captured.by_side(Side::Dark).count(), 1);
    assert_eq!(captured.material_advantage(), 0);
    assert_eq!(
        controller.board().piece_at(sq("d5")).map(|p| p.id.to_string()),
        Some("dark-queen-3".to_string())
    );
}

#[test]
fn test_rook_ray_stops_at_capture() {
    //! After clearing the a-file the rook reaches up to the first dark piece only
    let mut controller = Controller::new();

    play(
        &mut controller,
        &[("a2", "a4"), ("b7", "b5"), ("a4", "b5"), ("h7", "h6")],
    );
    controller.click(sq("a1"));

    let reachable = controller.reachable();
    assert!(reachable.contains(sq("a2")));
    assert!(reachable.contains(sq("a6")));
    assert!(reachable.contains(sq("a7")), "Dark pawn on a7 is capturable");
    assert!(!reachable.contains(sq("a8")), "Ray must stop at a7");
}

// ============================================================================
// Randomized Session Tests
// ============================================================================

#[test]
fn test_random_clicks_preserve_invariants() {
    //! Thousands of random clicks: pieces are conserved, the selection always
    //! belongs to the side to move, and ignored clicks change nothing
    let mut rng = StdRng::seed_from_u64(0xb0a2d5);
    let mut controller = Controller::new();
    let mut moves = 0;

    for _ in 0..5_000 {
        let square = Square::new(rng.random_range(0..8), rng.random_range(0..8));
        let before = controller.state().clone();

        let outcome = controller.click(square);

        match outcome {
            ClickOutcome::Ignored { .. } => {
                assert_eq!(controller.state(), &before);
            }
            ClickOutcome::Moved { .. } => {
                moves += 1;
                assert_ne!(controller.side_to_move(), before.side_to_move());
            }
            ClickOutcome::Selected { .. }
            | ClickOutcome::Reselected { .. }
            | ClickOutcome::Deselected { .. } => {
                assert_eq!(
                    controller.board(),
                    &before.board,
                    "Selection changes never move pieces"
                );
                assert_eq!(controller.turn(), before.turn);
                assert_eq!(controller.captured(), &before.captured);
                assert_eq!(controller.last_move(), before.last_move);
            }
        }

        let on_board = controller.board().piece_count();
        assert_eq!(on_board + controller.captured().len(), 32);

        if let Some(selected) = controller.selected() {
            assert_eq!(
                controller.board().side_at(selected),
                Some(controller.side_to_move())
            );
        } else {
            assert!(controller.reachable().is_empty());
        }

        if controller.board().count(Side::Light) == 0 || controller.board().count(Side::Dark) == 0
        {
            controller.reset();
        }
    }

    assert!(moves > 0, "A long random click stream should play some moves");
}
