//! Property-based tests for the game state machine
//!
//! These tests verify the state invariants hold across arbitrary action
//! sequences and judge answers.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_sender() -> impl Strategy<Value = Sender> {
    prop_oneof![Just(Sender::Ai), Just(Sender::User)]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (arb_sender(), "[a-zあ-ん]{1,20}")
            .prop_map(|(sender, text)| Action::AppendMessage { sender, text }),
        Just(Action::RecordTurn),
        "[a-zあ-ん ]{0,8}".prop_map(|theme| Action::SetTheme { theme }),
        Just(Action::Finish),
    ]
}

fn arb_answer() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(Verdict::CORRECT.to_string()),
        Just(Verdict::YES.to_string()),
        Just(Verdict::NO.to_string()),
        Just(Verdict::AMBIGUOUS.to_string()),
        Just(Verdict::UNKNOWN.to_string()),
        "[a-z]{1,10}",
    ]
}

fn apply(state: &GameState, action: Action) -> GameState {
    transition(state, action).map_or_else(|_| state.clone(), |r| r.new_state)
}

proptest! {
    #[test]
    fn messages_are_append_only(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut state = GameState::new();
        for action in actions {
            let next = apply(&state, action);
            prop_assert!(next.messages().len() >= state.messages().len());
            prop_assert_eq!(&next.messages()[..state.messages().len()], state.messages());
            state = next;
        }
    }

    #[test]
    fn message_ids_match_positions(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut state = GameState::new();
        for action in actions {
            state = apply(&state, action);
        }
        for (i, message) in state.messages().iter().enumerate() {
            prop_assert_eq!(message.id as usize, i);
        }
    }

    #[test]
    fn turn_counter_never_decrements(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut state = GameState::new();
        for action in actions {
            let is_turn = action == Action::RecordTurn;
            let result = transition(&state, action);
            let next = result.as_ref().map_or_else(|_| state.clone(), |r| r.new_state.clone());
            if is_turn && result.is_ok() {
                prop_assert_eq!(next.user_turn(), state.user_turn() + 1);
            } else {
                prop_assert_eq!(next.user_turn(), state.user_turn());
            }
            state = next;
        }
    }

    #[test]
    fn finished_never_reverts(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut state = GameState::new();
        let mut seen_finished = false;
        for action in actions {
            state = apply(&state, action);
            if seen_finished {
                prop_assert!(state.is_finished());
            }
            seen_finished |= state.is_finished();
        }
    }

    #[test]
    fn theme_empty_only_while_initializing(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut state = GameState::new();
        for action in actions {
            state = apply(&state, action);
            if state.theme().is_empty() {
                prop_assert_ne!(state.phase(), Phase::Active);
            }
        }
    }

    #[test]
    fn full_game_respects_turn_budget(
        answers in proptest::collection::vec(proptest::option::of(arb_answer()), 1..30)
    ) {
        let script = GameScript::default();
        let mut state = apply(&GameState::new(), Action::SetTheme { theme: "りんご".to_string() });

        // `None` is a judge call that failed
        for answer in answers {
            if state.is_finished() {
                break;
            }
            let before = state.messages().len();
            let (started, turn) = begin_turn(&state, "質問").unwrap();
            prop_assert_eq!(started.new_state.messages().len(), before + 1);
            prop_assert_eq!(turn, state.user_turn() + 1);

            let Some(answer) = answer else {
                match abandon_turn(&started.new_state, &script, turn).unwrap() {
                    Some(ended) => {
                        prop_assert_eq!(turn, script.max_turns);
                        prop_assert!(ended.new_state.is_finished());
                        prop_assert_eq!(ended.new_state.messages().len(), before + 2);
                        state = ended.new_state;
                    }
                    None => {
                        prop_assert!(turn < script.max_turns);
                        state = started.new_state;
                    }
                }
                continue;
            };

            let (resolved, outcome) = resolve_turn(&started.new_state, &script, turn, &answer).unwrap();
            let added = &resolved.new_state.messages()[before + 1..];

            match outcome {
                TurnOutcome::Solved => {
                    prop_assert_eq!(added.len(), 1);
                    prop_assert!(added[0].text.contains("りんご"));
                }
                TurnOutcome::OutOfTurns => {
                    prop_assert_eq!(turn, script.max_turns);
                    prop_assert_eq!(added.len(), 2);
                    prop_assert_eq!(&added[0].text, &answer);
                }
                TurnOutcome::Continue => {
                    prop_assert!(turn < script.max_turns);
                    prop_assert_eq!(added.len(), 1);
                    prop_assert_eq!(&added[0].text, &answer);
                }
            }
            prop_assert_eq!(
                resolved.new_state.is_finished(),
                outcome != TurnOutcome::Continue
            );
            state = resolved.new_state;
        }
        prop_assert!(state.user_turn() <= script.max_turns);
    }
}
