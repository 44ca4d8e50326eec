//! Property tests for the randomizer, board generation and turn resolution.

use std::time::Duration;

use proptest::prelude::*;
use rust_pairs::board::generate_board;
use rust_pairs::cards::{CardIndex, CardStatus};
use rust_pairs::core::{GameConfig, GameError, GameRng, TurnOutcome};
use rust_pairs::render::NullRenderer;
use rust_pairs::session::{ClickTarget, Dispatched, GameSession};

/// A player input: click a card, or wait some milliseconds.
#[derive(Clone, Debug)]
enum Step {
    Click(u32),
    Wait(u64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0u32..16).prop_map(Step::Click),
        1 => (0u64..1500).prop_map(Step::Wait),
    ]
}

proptest! {
    // =========================================================================
    // Randomizer
    // =========================================================================

    /// Shuffling returns a permutation and leaves the input alone.
    #[test]
    fn shuffled_is_permutation(
        seed in any::<u64>(),
        items in prop::collection::vec(any::<u16>(), 1..64),
    ) {
        let original = items.clone();
        let mut rng = GameRng::new(seed);

        let mut shuffled = rng.shuffled(&items);

        prop_assert_eq!(&items, &original);
        prop_assert_eq!(shuffled.len(), items.len());

        let mut sorted = items.clone();
        sorted.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, sorted);
    }

    /// Picking returns exactly `k` distinct members of the input.
    #[test]
    fn pick_random_distinct(
        seed in any::<u64>(),
        (n, k) in (0usize..40).prop_flat_map(|n| (Just(n), 0..=n)),
    ) {
        let items: Vec<u32> = (0..n as u32).collect();
        let mut rng = GameRng::new(seed);

        let mut picks = rng.pick_random(&items, k).unwrap();

        prop_assert_eq!(picks.len(), k);
        prop_assert!(picks.iter().all(|p| items.contains(p)));
        picks.sort_unstable();
        picks.dedup();
        prop_assert_eq!(picks.len(), k);
    }

    /// Asking for more than there is always fails.
    #[test]
    fn pick_random_too_many(seed in any::<u64>(), n in 0usize..20, extra in 1usize..5) {
        let items: Vec<u32> = (0..n as u32).collect();
        let mut rng = GameRng::new(seed);

        let err = rng.pick_random(&items, n + extra).unwrap_err();
        prop_assert_eq!(err, GameError::InvalidArgument { requested: n + extra, available: n });
    }

    // =========================================================================
    // Board Generation
    // =========================================================================

    /// Odd dimensions are always a configuration error.
    #[test]
    fn odd_dimension_rejected(seed in any::<u64>(), half in 0usize..50) {
        let dimension = half * 2 + 1;
        let err = generate_board(&GameConfig::new(dimension), &mut GameRng::new(seed)).unwrap_err();
        prop_assert_eq!(err, GameError::Configuration { dimension });
    }

    /// Even boards have d² face-down cards, each symbol exactly twice.
    #[test]
    fn even_board_is_paired(seed in any::<u64>(), dimension in prop::sample::select(vec![2usize, 4])) {
        let board = generate_board(&GameConfig::new(dimension), &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(board.len(), dimension * dimension);
        prop_assert_eq!(board.hidden_count(), dimension * dimension);
        let counts = board.symbol_counts();
        prop_assert_eq!(counts.len(), dimension * dimension / 2);
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    // =========================================================================
    // Turn Resolution
    // =========================================================================

    /// Under any click/wait sequence: one move per reveal, at most two cards
    /// up per cycle, matched cards stay matched.
    #[test]
    fn random_play_invariants(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..80)) {
        let mut session = GameSession::new(GameConfig::new(4).with_seed(seed), NullRenderer).unwrap();
        let mut reveals = 0u32;
        let mut matched: Vec<CardIndex> = Vec::new();

        for step in steps {
            match step {
                Step::Click(index) => {
                    let result = session.dispatch(ClickTarget::Card(CardIndex::new(index))).unwrap();
                    if let Dispatched::Turn(outcome) = result {
                        reveals += 1;
                        if let TurnOutcome::Matched(a, b) = outcome {
                            matched.push(a);
                            matched.push(b);
                        }
                    }
                }
                Step::Wait(ms) => session.advance(Duration::from_millis(ms)),
            }

            prop_assert_eq!(session.state().total_moves, reveals);
            prop_assert!(session.state().active_revealed <= 2);
            prop_assert!(session.board().count_with_status(CardStatus::Revealed) <= 2);
            for index in &matched {
                prop_assert_eq!(session.board().card(*index).unwrap().status, CardStatus::Matched);
            }
        }
    }
}
