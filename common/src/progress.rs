//! アップロード中の疑似プログレス
//!
//! レスポンスが返るまで上限(90%)未満でゆっくり増加し、
//! 完了時に100%へ。表示は少し遅れて消す。

pub const TICK_INTERVAL_MS: u32 = 200;
pub const MAX_STEP: f64 = 15.0;
pub const IN_FLIGHT_CAP: f64 = 90.0;
pub const HIDE_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulatedProgress {
    value: f64,
    visible: bool,
    running: bool,
}

impl SimulatedProgress {
    pub fn start(&mut self) {
        self.value = 0.0;
        self.visible = true;
        self.running = true;
    }

    /// `step` は [0, MAX_STEP) の乱数を想定。単調増加、上限で止まる
    pub fn tick(&mut self, step: f64) {
        if !self.running || !step.is_finite() {
            return;
        }
        self.value = (self.value + step.clamp(0.0, MAX_STEP)).min(IN_FLIGHT_CAP);
    }

    pub fn complete(&mut self) {
        self.value = 100.0;
        self.running = false;
    }

    pub fn hide(&mut self) {
        self.value = 0.0;
        self.visible = false;
        self.running = false;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_and_capped() {
        let mut progress = SimulatedProgress::default();
        progress.start();

        let mut last = progress.value();
        for step in [14.9, 3.0, 0.0, 14.0, 14.0, 14.0, 14.0, 14.0, 14.0, 14.0] {
            progress.tick(step);
            assert!(progress.value() >= last);
            assert!(progress.value() <= IN_FLIGHT_CAP);
            last = progress.value();
        }
        assert_eq!(progress.value(), IN_FLIGHT_CAP);
    }

    #[test]
    fn test_negative_step_ignored() {
        let mut progress = SimulatedProgress::default();
        progress.start();
        progress.tick(10.0);
        progress.tick(-50.0);
        progress.tick(f64::NAN);
        assert_eq!(progress.value(), 10.0);
    }

    #[test]
    fn test_complete_then_hide() {
        let mut progress = SimulatedProgress::default();
        progress.start();
        progress.tick(5.0);
        progress.complete();
        assert_eq!(progress.value(), 100.0);
        assert!(progress.is_visible());

        // 完了後のtickで戻らない
        progress.tick(5.0);
        assert_eq!(progress.value(), 100.0);

        progress.hide();
        assert!(!progress.is_visible());
        assert_eq!(progress.value(), 0.0);
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut progress = SimulatedProgress::default();
        progress.tick(10.0);
        assert_eq!(progress.value(), 0.0);
        assert!(!progress.is_visible());
    }
}
