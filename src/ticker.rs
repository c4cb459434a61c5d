// File: ./src/ticker.rs
// Frame clock for the animated views.
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick(pub Instant);

/// Background task that emits a `Tick` per frame.
///
/// Exactly one owner holds the receiving end. Dropping the `Ticker` aborts the
/// task, so a stopped animation can never be advanced by a stale clock.
#[derive(Debug)]
pub struct Ticker {
    rx: mpsc::Receiver<Tick>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Starts ticking at `fps` frames per second (at least 1).
    ///
    /// Must be called from inside a tokio runtime.
    pub fn start(fps: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
        // Room for one pending frame; a slow consumer drops frames, not time.
        let (tx, rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                let at = interval.tick().await;
                if tx.send(Tick(at)).await.is_err() {
                    break;
                }
            }
        });

        log::debug!("Ticker started at {:?} per frame", period);
        Self { rx, handle }
    }

    /// Newest pending tick, if any, without waiting.
    pub fn try_latest(&mut self) -> Option<Tick> {
        let mut latest = None;
        while let Ok(tick) = self.rx.try_recv() {
            latest = Some(tick);
        }
        latest
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        log::debug!("Ticker stopped");
    }
}
