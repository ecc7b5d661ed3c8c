#[cfg(test)]
mod backoff_tests {
    use std::time::Duration;
    use crate::backoff::enums::backoff_step::BackoffStep;
    use crate::backoff::impls::backoff::MAX_ATTEMPTS;
    use crate::backoff::structs::backoff::Backoff;
    use crate::backoff::structs::timer_slot::TimerSlot;

    #[test]
    fn test_timeout_doubles_from_base() {
        let base = Duration::from_millis(15_000);
        assert_eq!(Backoff::<()>::timeout_for(base, 1), Duration::from_millis(30_000));
        assert_eq!(Backoff::<()>::timeout_for(base, 2), Duration::from_millis(60_000));
        assert_eq!(Backoff::<()>::timeout_for(base, 8), Duration::from_millis(3_840_000));
    }

    #[test]
    fn test_timeout_saturates() {
        let timeout = Backoff::<()>::timeout_for(Duration::from_secs(u64::MAX / 2), 40);
        assert_eq!(timeout, Duration::MAX);
    }

    #[test]
    fn test_seven_resends_then_exhausted() {
        let base = Duration::from_millis(10);
        let mut backoff = Backoff::new("packet", base);
        assert_eq!(backoff.attempt(), 1);
        assert_eq!(backoff.current_timeout(), Duration::from_millis(20));

        let mut waits = vec![backoff.current_timeout()];
        for _ in 0..7 {
            match backoff.on_elapsed() {
                BackoffStep::Resend { payload, next_timeout } => {
                    assert_eq!(payload, "packet");
                    waits.push(next_timeout);
                }
                BackoffStep::Exhausted { .. } => panic!("exhausted too early"),
            }
        }
        assert_eq!(backoff.attempt(), MAX_ATTEMPTS);

        // waits[n - 1] precedes resend n; the last one precedes exhaustion
        let expected: Vec<Duration> = (1..=8).map(|n| base * 2u32.pow(n)).collect();
        assert_eq!(waits, expected);
        assert!(waits.windows(2).all(|pair| pair[0] < pair[1]));

        assert_eq!(backoff.on_elapsed(), BackoffStep::Exhausted { timeout: Duration::from_millis(2_560) });
        assert_eq!(backoff.on_elapsed(), BackoffStep::Exhausted { timeout: Duration::from_millis(2_560) });
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_slot_fires_once() {
        let mut slot = TimerSlot::new();
        assert!(!slot.is_armed());
        slot.arm(Duration::from_secs(5));
        assert!(slot.is_armed());

        let started = tokio::time::Instant::now();
        slot.elapsed().await;
        assert!(started.elapsed() >= Duration::from_secs(5));
        assert!(!slot.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_slot_cancel_is_idempotent() {
        let mut slot = TimerSlot::new();
        slot.arm(Duration::from_secs(1));
        slot.cancel();
        slot.cancel();
        assert!(!slot.is_armed());

        let fired = tokio::time::timeout(Duration::from_secs(10), slot.elapsed()).await;
        assert!(fired.is_err(), "an empty slot never fires");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_slot_rearm_replaces_previous() {
        let mut slot = TimerSlot::new();
        slot.arm(Duration::from_secs(1));
        slot.arm(Duration::from_secs(30));

        let early = tokio::time::timeout(Duration::from_secs(5), slot.elapsed()).await;
        assert!(early.is_err());
        assert!(slot.is_armed(), "a dropped wait keeps the timer armed");

        let started = tokio::time::Instant::now();
        slot.elapsed().await;
        assert!(started.elapsed() >= Duration::from_secs(24));
    }
}
