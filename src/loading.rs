/// Time between splash steps. Four transitions give the 1.2s splash.
pub const STEP_INTERVAL_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadingStep {
    Init,
    Loading,
    AlmostReady,
    Welcome,
    Done,
}

impl LoadingStep {
    pub fn next(self) -> Self {
        match self {
            Self::Init => Self::Loading,
            Self::Loading => Self::AlmostReady,
            Self::AlmostReady => Self::Welcome,
            Self::Welcome | Self::Done => Self::Done,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Done
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Init => "Initializing...",
            Self::Loading => "Loading...",
            Self::AlmostReady => "Almost ready...",
            Self::Welcome | Self::Done => "Welcome!",
        }
    }

    /// Width of the splash progress bar, in percent.
    pub fn percent(self) -> u8 {
        match self {
            Self::Init => 0,
            Self::Loading => 35,
            Self::AlmostReady => 70,
            Self::Welcome => 90,
            Self::Done => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced(LoadingStep),
    /// Reached `Done`. Reported by exactly one tick.
    Finished,
    Idle,
}

/// The splash step plus a latch so completion is reported once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSequence {
    step: LoadingStep,
    finished: bool,
}

impl Default for LoadingSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingSequence {
    pub fn new() -> Self {
        Self {
            step: LoadingStep::Init,
            finished: false,
        }
    }

    pub fn step(&self) -> LoadingStep {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Idle;
        }
        self.step = self.step.next();
        if self.step.is_terminal() {
            self.finished = true;
            Tick::Finished
        } else {
            Tick::Advanced(self.step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_only_move_forward() {
        let mut step = LoadingStep::Init;
        for _ in 0..10 {
            let next = step.next();
            assert!(next >= step);
            assert!(next > step || step.is_terminal());
            step = next;
        }
        assert_eq!(step, LoadingStep::Done);
        assert_eq!(LoadingStep::Done.next(), LoadingStep::Done);
    }

    #[test]
    fn test_sequence_finishes_exactly_once() {
        let mut seq = LoadingSequence::new();
        let ticks = (0..8).map(|_| seq.tick()).collect::<Vec<_>>();
        assert_eq!(
            ticks,
            vec![
                Tick::Advanced(LoadingStep::Loading),
                Tick::Advanced(LoadingStep::AlmostReady),
                Tick::Advanced(LoadingStep::Welcome),
                Tick::Finished,
                Tick::Idle,
                Tick::Idle,
                Tick::Idle,
                Tick::Idle,
            ]
        );
        assert!(seq.is_finished());
        assert_eq!(seq.step(), LoadingStep::Done);
    }

    #[test]
    fn test_completion_never_before_done() {
        let mut seq = LoadingSequence::new();
        let mut completions = 0;
        while !seq.is_finished() {
            assert!(!seq.step().is_terminal());
            if seq.tick() == Tick::Finished {
                completions += 1;
                assert_eq!(seq.step(), LoadingStep::Done);
            }
        }
        seq.tick();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_splash_duration() {
        let mut seq = LoadingSequence::new();
        let mut ticks = 0;
        while seq.tick() != Tick::Finished {
            ticks += 1;
        }
        ticks += 1;
        assert_eq!(ticks as u64 * STEP_INTERVAL_MS, 1200);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let steps = [
            LoadingStep::Init,
            LoadingStep::Loading,
            LoadingStep::AlmostReady,
            LoadingStep::Welcome,
            LoadingStep::Done,
        ];
        assert!(steps.windows(2).all(|w| w[0].percent() < w[1].percent()));
    }
}
