//! Per-frame math for the animated bits of the page: stat counters, cloud
//! parallax and float, and the typed headline.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterStep {
    /// Still counting; show this value and ask for another frame.
    Running(i64),
    /// Snapped to the target; no more frames.
    Done(i64),
}

impl CounterStep {
    pub fn value(self) -> i64 {
        match self {
            CounterStep::Running(v) | CounterStep::Done(v) => v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    progress: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u64, frame_ms: u64) -> Self {
        let frames = duration_ms as f64 / frame_ms.max(1) as f64;
        Self {
            target,
            increment: target as f64 / frames,
            progress: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self) -> CounterStep {
        if self.finished {
            return CounterStep::Done(self.target);
        }
        self.progress += self.increment;
        // NaN (zero target over zero frames) falls through to the snap.
        if self.progress < self.target as f64 {
            CounterStep::Running(self.progress.floor() as i64)
        } else {
            self.finished = true;
            CounterStep::Done(self.target)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CloudOffset {
    pub x: f64,
    pub y: f64,
}

impl CloudOffset {
    pub fn to_css(self) -> String {
        format!("transform: translate({:.2}px, {:.2}px);", self.x, self.y)
    }
}

/// Scroll and pointer driven offset. `pointer_x` is the pointer position
/// normalised to [-0.5, 0.5] across the viewport.
pub fn parallax_offset(index: usize, scroll_y: f64, pointer_x: f64) -> CloudOffset {
    let i = index as f64;
    let speed = 0.3 + i * 0.1;
    CloudOffset {
        x: pointer_x * (10.0 + i * 2.0),
        y: scroll_y * speed,
    }
}

/// Idle bobbing, `t_secs` being seconds since the page started.
pub fn float_offset(index: usize, t_secs: f64) -> CloudOffset {
    let i = index as f64;
    CloudOffset {
        x: (t_secs + i).sin() * 5.0,
        y: (t_secs * 0.7 + i).cos() * 3.0,
    }
}

pub fn cloud_offset(index: usize, scroll_y: f64, pointer_x: f64, t_secs: f64) -> CloudOffset {
    let p = parallax_offset(index, scroll_y, pointer_x);
    let f = float_offset(index, t_secs);
    CloudOffset {
        x: p.x + f.x,
        y: p.y + f.y,
    }
}

pub fn normalize_pointer(client: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    client / extent - 0.5
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveals one more character. Returns whether anything is left to type.
    pub fn type_next(&mut self) -> bool {
        if self.shown < self.chars.len() {
            self.shown += 1;
        }
        self.shown < self.chars.len()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut counter: CounterAnimation) -> Vec<CounterStep> {
        let mut steps = Vec::new();
        loop {
            let step = counter.step();
            steps.push(step);
            if let CounterStep::Done(_) = step {
                return steps;
            }
            assert!(steps.len() < 10_000, "counter never finished");
        }
    }

    #[test]
    fn counter_is_monotonic_and_lands_on_target() {
        for target in [1, 7, 95, 1000, 2_500_000] {
            let steps = run(CounterAnimation::new(target, 2000, 16));
            let values: Vec<i64> = steps.iter().map(|s| s.value()).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {target}: {values:?}");
            assert_eq!(*values.last().unwrap(), target);
            assert!(values.len() <= 127);
        }
    }

    #[test]
    fn zero_target_shows_zero_immediately() {
        let mut counter = CounterAnimation::new(0, 2000, 16);
        assert_eq!(counter.step(), CounterStep::Done(0));
        assert!(counter.is_finished());
    }

    #[test]
    fn negative_target_snaps_on_first_frame() {
        let mut counter = CounterAnimation::new(-40, 2000, 16);
        assert_eq!(counter.step(), CounterStep::Done(-40));
    }

    #[test]
    fn zero_duration_snaps() {
        let mut counter = CounterAnimation::new(50, 0, 16);
        assert_eq!(counter.step(), CounterStep::Done(50));
        let mut counter = CounterAnimation::new(0, 0, 16);
        assert_eq!(counter.step(), CounterStep::Done(0));
    }

    #[test]
    fn parallax_scales_with_index() {
        let first = parallax_offset(0, 100.0, 0.5);
        let third = parallax_offset(2, 100.0, 0.5);
        assert!((first.y - 30.0).abs() < 1e-9);
        assert!((third.y - 50.0).abs() < 1e-9);
        assert!((first.x - 5.0).abs() < 1e-9);
        assert!((third.x - 7.0).abs() < 1e-9);
    }

    #[test]
    fn float_stays_within_amplitude() {
        for frame in 0..500 {
            let t = frame as f64 * 0.016;
            for i in 0..4 {
                let o = float_offset(i, t);
                assert!(o.x.abs() <= 5.0 && o.y.abs() <= 3.0);
            }
        }
    }

    #[test]
    fn pointer_normalizes_around_center() {
        assert_eq!(normalize_pointer(500.0, 1000.0), 0.0);
        assert_eq!(normalize_pointer(0.0, 1000.0), -0.5);
        assert_eq!(normalize_pointer(10.0, 0.0), 0.0);
    }

    #[test]
    fn typewriter_reveals_one_char_at_a_time() {
        let mut tw = Typewriter::new("Héllo");
        assert_eq!(tw.visible(), "");
        assert!(tw.type_next());
        assert_eq!(tw.visible(), "H");
        assert!(tw.type_next());
        assert_eq!(tw.visible(), "Hé");
        while tw.type_next() {}
        assert_eq!(tw.visible(), "Héllo");
        assert!(tw.is_done());
    }
}
