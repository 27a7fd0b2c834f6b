use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::session::{LevelStatus, PendingAdvance, SessionState, StatusKind, StatusMessage};
use super::validate::answer_matches;
use crate::puzzle::{Catalog, Level};

pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

pub const INCORRECT_MESSAGE: &str = "Incorrect solution. Try again!";
pub const NO_MORE_HINTS_MESSAGE: &str = "No more hints available for this level!";
pub const COMPLETE_PREFIX: &str =
    "Congratulations! You have completed all trials! The complete key is: ";
pub const KEY_MARKER: &str = "part of the key:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `next` is the level that becomes active once the advance delay elapses.
    Solved { level_id: u32, next: Option<u32> },
    Incorrect,
    AlreadySolved,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    Revealed { index: usize, text: String },
    Exhausted,
    Closed,
}

/// Decision logic over a borrowed catalog. Owns no session state.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEngine<'c> {
    catalog: &'c Catalog,
    advance_delay: Duration,
}

impl<'c> ProgressEngine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_advance_delay(catalog, DEFAULT_ADVANCE_DELAY)
    }

    pub fn with_advance_delay(catalog: &'c Catalog, advance_delay: Duration) -> Self {
        ProgressEngine {
            catalog,
            advance_delay,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn new_session(&self) -> SessionState {
        SessionState::new(self.catalog.first().id)
    }

    pub fn current_level(&self, state: &SessionState) -> &'c Level {
        self.catalog
            .get(state.current_level_id)
            .unwrap_or_else(|| self.catalog.last())
    }

    pub fn level_status(&self, state: &SessionState, id: u32) -> LevelStatus {
        state.level_status(id)
    }

    pub fn is_complete(&self, state: &SessionState) -> bool {
        state.solved_level_ids.len() == self.catalog.len()
    }

    pub fn hints_remaining(&self, state: &SessionState) -> usize {
        self.current_level(state)
            .hints
            .len()
            .saturating_sub(state.hints_shown)
    }

    pub fn submit_answer(
        &self,
        state: &mut SessionState,
        answer: &str,
        now: Instant,
    ) -> SubmitOutcome {
        if state.closed {
            return SubmitOutcome::Closed;
        }

        let level = self.current_level(state);
        if state.is_solved(level.id) {
            return SubmitOutcome::AlreadySolved;
        }

        if !answer_matches(&level.solution, answer) {
            debug!(level = level.id, "incorrect answer");
            state.last_message = Some(StatusMessage::new(
                StatusKind::Incorrect,
                INCORRECT_MESSAGE,
            ));
            return SubmitOutcome::Incorrect;
        }

        state.revealed_rewards.push(level.reward.clone());
        state.solved_level_ids.push(level.id);
        state.hints_shown = 0;
        info!(level = level.id, solved = state.solved_level_ids.len(), "level solved");

        let next = self.catalog.next_id(level.id);
        match next {
            Some(to) => {
                state.last_message = Some(StatusMessage::new(
                    StatusKind::Success,
                    format!("Correct! {}", level.reward),
                ));
                state.pending_advance = Some(PendingAdvance {
                    from: level.id,
                    to,
                    due: now + self.advance_delay,
                });
            }
            None => {
                let key: String = state.revealed_rewards.concat();
                state.last_message = Some(StatusMessage::new(
                    StatusKind::Complete,
                    format!("{COMPLETE_PREFIX}{key}"),
                ));
                info!("all levels solved");
            }
        }

        SubmitOutcome::Solved {
            level_id: level.id,
            next,
        }
    }

    pub fn request_hint(&self, state: &mut SessionState) -> HintOutcome {
        if state.closed {
            return HintOutcome::Closed;
        }

        let level = self.current_level(state);
        match level.hints.get(state.hints_shown) {
            Some(hint) => {
                let index = state.hints_shown;
                state.hints_shown += 1;
                state.last_message =
                    Some(StatusMessage::new(StatusKind::Hint, format!("Hint: {hint}")));
                debug!(level = level.id, hint = index + 1, "hint revealed");
                HintOutcome::Revealed {
                    index,
                    text: hint.clone(),
                }
            }
            None => {
                state.last_message = Some(StatusMessage::new(
                    StatusKind::HintsExhausted,
                    NO_MORE_HINTS_MESSAGE,
                ));
                HintOutcome::Exhausted
            }
        }
    }

    /// Fire the scheduled advance if it is due. Returns the newly active level.
    pub fn tick(&self, state: &mut SessionState, now: Instant) -> Option<u32> {
        if state.closed {
            return None;
        }
        let pending = state.pending_advance?;
        if now < pending.due {
            return None;
        }

        state.pending_advance = None;
        state.current_level_id = pending.to;
        state.hints_shown = 0;
        state.last_message = None;
        info!(from = pending.from, to = pending.to, "advanced to next level");
        Some(pending.to)
    }

    /// Combine the key fragments of every reward, in solve order.
    pub fn assemble_final_artifact(&self, state: &SessionState) -> Option<String> {
        if !self.is_complete(state) {
            return None;
        }
        Some(assemble_key(&state.revealed_rewards))
    }
}

/// Text after the key marker, trimmed. Rewards without the marker contribute nothing.
pub fn key_fragment(reward: &str) -> &str {
    reward
        .find(KEY_MARKER)
        .map(|at| reward[at + KEY_MARKER.len()..].trim())
        .unwrap_or("")
}

pub fn assemble_key<S: AsRef<str>>(rewards: &[S]) -> String {
    rewards.iter().map(|r| key_fragment(r.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog(levels: Vec<Level>) -> Catalog {
        Catalog::new(levels).unwrap()
    }

    fn three_levels() -> Catalog {
        catalog(vec![
            Level::new(1, "1234567890", "First part of the key: abc", &["h1", "h2", "h3"]),
            Level::new(2, "KEYBOARD", "Second part of the key: DEF ", &["k1"]),
            Level::new(3, "SOLANA", "Final part of the key: ghi", &[]),
        ])
    }

    fn solve_all(engine: &ProgressEngine, state: &mut SessionState, start: Instant) {
        let mut now = start;
        for level in engine.catalog().iter() {
            assert!(matches!(
                engine.submit_answer(state, &level.solution, now),
                SubmitOutcome::Solved { .. }
            ));
            now += DEFAULT_ADVANCE_DELAY;
            engine.tick(state, now);
        }
    }

    #[test]
    fn single_level_lowercase_answer_completes() {
        let catalog = catalog(vec![Level::new(1, "CAT", "part of the key: meow", &[])]);
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();

        let outcome = engine.submit_answer(&mut state, "cat", Instant::now());

        assert_eq!(outcome, SubmitOutcome::Solved { level_id: 1, next: None });
        assert_eq!(state.solved_level_ids(), &[1]);
        assert_eq!(state.revealed_rewards().len(), 1);
        let message = state.last_message().unwrap();
        assert_eq!(message.kind, StatusKind::Complete);
        assert!(message.text.contains("part of the key: meow"));
        assert_eq!(state.pending_advance(), None);
        assert!(engine.is_complete(&state));
    }

    #[test]
    fn advance_waits_for_the_delay_then_resets_hints() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();
        let t0 = Instant::now();

        engine.request_hint(&mut state);
        let outcome = engine.submit_answer(&mut state, "1234567890", t0);
        assert_eq!(outcome, SubmitOutcome::Solved { level_id: 1, next: Some(2) });
        assert_eq!(state.last_message().unwrap().text, "Correct! First part of the key: abc");

        assert_eq!(engine.tick(&mut state, t0 + Duration::from_millis(1999)), None);
        assert_eq!(state.current_level_id(), 1);

        assert_eq!(engine.tick(&mut state, t0 + DEFAULT_ADVANCE_DELAY), Some(2));
        assert_eq!(state.current_level_id(), 2);
        assert_eq!(state.hints_shown(), 0);
        assert_eq!(state.last_message(), None);
        assert_eq!(engine.tick(&mut state, t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn hints_run_out_after_the_last_one() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();

        let mut texts = Vec::new();
        for _ in 0..4 {
            engine.request_hint(&mut state);
            texts.push(state.last_message().unwrap().text.clone());
        }

        assert_eq!(texts, vec!["Hint: h1", "Hint: h2", "Hint: h3", NO_MORE_HINTS_MESSAGE]);
        assert_eq!(state.hints_shown(), 3);
        assert_eq!(engine.hints_remaining(&state), 0);
    }

    #[test]
    fn hints_never_touch_rewards() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();
        engine.submit_answer(&mut state, "1234567890", Instant::now());
        let rewards = state.revealed_rewards().to_vec();

        engine.request_hint(&mut state);

        assert_eq!(state.revealed_rewards(), rewards.as_slice());
        assert_eq!(state.solved_level_ids(), &[1]);
    }

    #[test]
    fn spaced_answer_is_accepted() {
        let catalog = catalog(vec![Level::new(1, "CAT", "r", &[])]);
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();

        let outcome = engine.submit_answer(&mut state, " C A T ", Instant::now());

        assert!(matches!(outcome, SubmitOutcome::Solved { level_id: 1, .. }));
    }

    #[test]
    fn teardown_cancels_the_pending_advance() {
        let catalog = three_levels();
        let engine = ProgressEngine::with_advance_delay(&catalog, Duration::from_millis(2000));
        let mut state = engine.new_session();
        let t0 = Instant::now();

        engine.submit_answer(&mut state, "1234567890", t0);
        assert_eq!(engine.tick(&mut state, t0 + Duration::from_millis(500)), None);
        state.teardown();

        assert_eq!(engine.tick(&mut state, t0 + Duration::from_millis(2500)), None);
        assert_eq!(state.current_level_id(), 1);
        assert!(state.is_closed());
        assert_eq!(engine.submit_answer(&mut state, "KEYBOARD", t0), SubmitOutcome::Closed);
        assert_eq!(engine.request_hint(&mut state), HintOutcome::Closed);
    }

    #[test]
    fn incorrect_answer_only_sets_the_message() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();
        let before = state.clone();

        assert_eq!(engine.submit_answer(&mut state, "", Instant::now()), SubmitOutcome::Incorrect);

        assert_eq!(state.last_message().unwrap().text, INCORRECT_MESSAGE);
        state.last_message = before.last_message.clone();
        assert_eq!(state, before);
    }

    #[test]
    fn resubmitting_during_the_delay_does_not_duplicate() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();
        let t0 = Instant::now();

        engine.submit_answer(&mut state, "1234567890", t0);
        let outcome = engine.submit_answer(&mut state, "1234567890", t0);

        assert_eq!(outcome, SubmitOutcome::AlreadySolved);
        assert_eq!(state.solved_level_ids(), &[1]);
        assert_eq!(state.revealed_rewards().len(), 1);
    }

    #[test]
    fn level_two_cannot_be_solved_first() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();

        let outcome = engine.submit_answer(&mut state, "KEYBOARD", Instant::now());

        assert_eq!(outcome, SubmitOutcome::Incorrect);
        assert_eq!(engine.level_status(&state, 1), LevelStatus::Active);
        assert_eq!(engine.level_status(&state, 2), LevelStatus::Locked);
    }

    #[test]
    fn statuses_follow_progress() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();
        let t0 = Instant::now();

        engine.submit_answer(&mut state, "1234567890", t0);
        assert_eq!(state.level_status(1), LevelStatus::Solved);
        assert_eq!(state.level_status(2), LevelStatus::Locked);

        engine.tick(&mut state, t0 + DEFAULT_ADVANCE_DELAY);
        assert_eq!(state.level_status(2), LevelStatus::Active);
        assert_eq!(state.reward_for(1), Some("First part of the key: abc"));
        assert_eq!(state.reward_for(2), None);
    }

    #[test]
    fn hints_on_a_solved_level_start_from_the_first() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();

        engine.request_hint(&mut state);
        engine.request_hint(&mut state);
        engine.submit_answer(&mut state, "1234567890", Instant::now());

        assert_eq!(
            engine.request_hint(&mut state),
            HintOutcome::Revealed { index: 0, text: "h1".to_string() }
        );
    }

    #[test]
    fn final_message_concatenates_rewards_in_order() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();

        solve_all(&engine, &mut state, Instant::now());

        assert_eq!(state.current_level_id(), 3);
        assert_eq!(
            state.last_message().unwrap().text,
            format!(
                "{COMPLETE_PREFIX}First part of the key: abcSecond part of the key: DEF Final part of the key: ghi"
            )
        );
    }

    #[test]
    fn artifact_only_after_completion() {
        let catalog = three_levels();
        let engine = ProgressEngine::new(&catalog);
        let mut state = engine.new_session();
        assert_eq!(engine.assemble_final_artifact(&state), None);

        engine.submit_answer(&mut state, "1234567890", Instant::now());
        assert_eq!(engine.assemble_final_artifact(&state), None);

        let mut state = engine.new_session();
        solve_all(&engine, &mut state, Instant::now());
        assert_eq!(engine.assemble_final_artifact(&state).as_deref(), Some("abcDEFghi"));
        assert_eq!(engine.assemble_final_artifact(&state).as_deref(), Some("abcDEFghi"));
    }

    #[test]
    fn rewards_without_marker_add_nothing() {
        assert_eq!(key_fragment("just a trophy"), "");
        assert_eq!(key_fragment("part of the key:   xyz  "), "xyz");
        assert_eq!(assemble_key(&["a part of the key: 1", "none", "part of the key: 2"]), "12");
    }

    fn scramble(solution: &str, flips: &[bool], pads: &[usize]) -> String {
        let mut answer = String::new();
        for (i, c) in solution.chars().enumerate() {
            answer.push_str(&" ".repeat(pads[i]));
            if flips[i] {
                answer.push(c.to_ascii_lowercase());
            } else {
                answer.push(c.to_ascii_uppercase());
            }
        }
        answer.push_str(&"\t".repeat(pads[pads.len() - 1]));
        answer
    }

    proptest! {
        #[test]
        fn any_casing_and_spacing_of_the_solution_solves(
            solution in "[A-Za-z0-9]{1,12}",
            flips in proptest::collection::vec(any::<bool>(), 12),
            pads in proptest::collection::vec(0usize..3, 13),
        ) {
            let catalog = catalog(vec![Level::new(1, &solution, "reward", &[])]);
            let engine = ProgressEngine::new(&catalog);
            let mut state = engine.new_session();

            let answer = scramble(&solution, &flips, &pads);
            let outcome = engine.submit_answer(&mut state, &answer, Instant::now());

            prop_assert_eq!(outcome, SubmitOutcome::Solved { level_id: 1, next: None });
            prop_assert_eq!(state.revealed_rewards().len(), 1);
            prop_assert_eq!(state.level_status(1), LevelStatus::Solved);
        }

        #[test]
        fn wrong_answers_leave_state_alone(answer in "[a-z ]{0,10}") {
            let catalog = three_levels();
            let engine = ProgressEngine::new(&catalog);
            let mut state = engine.new_session();
            engine.request_hint(&mut state);
            let before = state.clone();

            prop_assume!(!answer_matches("1234567890", &answer));
            engine.submit_answer(&mut state, &answer, Instant::now());

            state.last_message = before.last_message.clone();
            prop_assert_eq!(state, before);
        }

        #[test]
        fn hint_requests_yield_hints_in_order(hint_count in 0usize..5, requests in 0usize..10) {
            let hints: Vec<String> = (0..hint_count).map(|i| format!("hint {i}")).collect();
            let hint_refs: Vec<&str> = hints.iter().map(String::as_str).collect();
            let catalog = catalog(vec![Level::new(1, "CAT", "r", &hint_refs)]);
            let engine = ProgressEngine::new(&catalog);
            let mut state = engine.new_session();

            let mut revealed = Vec::new();
            for _ in 0..requests {
                match engine.request_hint(&mut state) {
                    HintOutcome::Revealed { text, .. } => revealed.push(text),
                    HintOutcome::Exhausted => {
                        prop_assert_eq!(&state.last_message().unwrap().text, NO_MORE_HINTS_MESSAGE);
                    }
                    HintOutcome::Closed => prop_assert!(false, "session closed unexpectedly"),
                }
                prop_assert!(state.hints_shown() <= hint_count);
            }

            prop_assert_eq!(revealed.len(), requests.min(hint_count));
            prop_assert_eq!(revealed, hints[..requests.min(hint_count)].to_vec());
        }
    }
}
