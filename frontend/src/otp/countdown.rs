/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running(u32),
    /// Reached zero while a request was in flight; expiry waits for it to settle.
    ExpiryDeferred,
    /// Reported exactly once per attempt.
    Expired,
    /// Expired or halted earlier; nothing to do.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendBlocked {
    Cooldown(u32),
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    ttl: u32,
    remaining: u32,
    cooldown: u32,
    cooldown_left: u32,
    expired: bool,
    halted: bool,
}

impl Countdown {
    pub fn new(ttl_secs: u32, resend_cooldown_secs: u32) -> Self {
        Self {
            ttl: ttl_secs,
            remaining: ttl_secs,
            cooldown: resend_cooldown_secs,
            cooldown_left: 0,
            expired: false,
            halted: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn is_running(&self) -> bool {
        !self.expired && !self.halted
    }

    pub fn resend_wait(&self) -> u32 {
        self.cooldown_left
    }

    pub fn can_resend(&self) -> bool {
        self.is_running() && self.cooldown_left == 0
    }

    /// Advances one second. `in_flight` holds back the expiry transition.
    pub fn tick(&mut self, in_flight: bool) -> Tick {
        if !self.is_running() {
            return Tick::Stopped;
        }
        self.cooldown_left = self.cooldown_left.saturating_sub(1);
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return Tick::Running(self.remaining);
        }
        if in_flight {
            return Tick::ExpiryDeferred;
        }
        self.expired = true;
        Tick::Expired
    }

    /// Restarts the attempt for a resend and arms the cooldown.
    pub fn restart(&mut self) -> Result<(), ResendBlocked> {
        if self.expired {
            return Err(ResendBlocked::Expired);
        }
        if self.cooldown_left > 0 {
            return Err(ResendBlocked::Cooldown(self.cooldown_left));
        }
        self.remaining = self.ttl;
        self.cooldown_left = self.cooldown;
        self.halted = false;
        Ok(())
    }

    /// Stops ticking for good, used once the flow has finished.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_and_formats() {
        let mut countdown = Countdown::new(300, 10);
        assert_eq!(countdown.label(), "05:00");
        assert_eq!(countdown.tick(false), Tick::Running(299));
        assert_eq!(countdown.label(), "04:59");
    }

    #[test]
    fn expires_exactly_once() {
        let mut countdown = Countdown::new(2, 10);
        assert_eq!(countdown.tick(false), Tick::Running(1));
        assert_eq!(countdown.tick(false), Tick::Expired);
        assert!(countdown.is_expired());
        for _ in 0..5 {
            assert_eq!(countdown.tick(false), Tick::Stopped);
        }
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn expiry_waits_for_in_flight_request() {
        let mut countdown = Countdown::new(1, 10);
        assert_eq!(countdown.tick(true), Tick::ExpiryDeferred);
        assert_eq!(countdown.tick(true), Tick::ExpiryDeferred);
        assert!(!countdown.is_expired());
        assert_eq!(countdown.tick(false), Tick::Expired);
        assert_eq!(countdown.tick(false), Tick::Stopped);
    }

    #[test]
    fn restart_resets_to_ttl_and_arms_cooldown() {
        let mut countdown = Countdown::new(300, 10);
        for _ in 0..42 {
            countdown.tick(false);
        }
        countdown.restart().expect("resend allowed");
        assert_eq!(countdown.remaining(), 300);
        assert!(!countdown.can_resend());
        assert_eq!(countdown.restart(), Err(ResendBlocked::Cooldown(10)));

        for _ in 0..10 {
            countdown.tick(false);
        }
        assert!(countdown.can_resend());
    }

    #[test]
    fn restart_after_expiry_is_refused() {
        let mut countdown = Countdown::new(1, 0);
        countdown.tick(false);
        assert_eq!(countdown.restart(), Err(ResendBlocked::Expired));
    }

    #[test]
    fn halted_countdown_never_expires() {
        let mut countdown = Countdown::new(1, 0);
        countdown.halt();
        assert_eq!(countdown.tick(false), Tick::Stopped);
        assert!(!countdown.is_expired());
    }
}
