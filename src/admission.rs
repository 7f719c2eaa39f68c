use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

// Outcome of an admission check for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Forbidden,        // client is currently banned
    TooManyRequests,  // this request crossed the limit and triggered a ban
}

// Request history + banlist form one consistency domain, so both maps
// live behind the same lock.
struct AdmissionState {
    requests: HashMap<String, Vec<Instant>>,
    banlist: HashMap<String, Instant>,
}

impl AdmissionState {
    // Read-with-eviction: looking up an expired ban entry deletes it.
    // A ban lifts at exactly its expiry instant, not one tick later.
    fn is_banned(&mut self, client: &str, now: Instant) -> bool {
        match self.banlist.get(client) {
            Some(&lifts_at) if lifts_at > now => true,
            Some(_) => {
                self.banlist.remove(client);
                false
            }
            None => false,
        }
    }

    // Banning an already-banned client overwrites the expiry, no stacking
    fn ban(&mut self, client: &str, now: Instant, duration: Duration) {
        self.banlist.insert(client.to_string(), now + duration);
    }

    // Record this request and report whether the client went over the limit.
    // Entries older than the window are pruned here, on access; exactly
    // `limit` requests in-window are fine, the next one is not.
    fn record_and_check(
        &mut self,
        client: &str,
        now: Instant,
        window: Duration,
        limit: usize,
    ) -> bool {
        let times = self.requests.entry(client.to_string()).or_default();
        times.retain(|&t| now.duration_since(t) <= window);
        times.push(now);
        times.len() > limit
    }
}

pub struct AdmissionController {
    limit: usize,
    window: Duration,
    ban_duration: Duration,
    state: Mutex<AdmissionState>,
}

impl AdmissionController {
    pub fn new(limit: usize, window: Duration, ban_duration: Duration) -> Self {
        Self {
            limit,
            window,
            ban_duration,
            state: Mutex::new(AdmissionState {
                requests: HashMap::new(),
                banlist: HashMap::new(),
            }),
        }
    }

    // Full admission decision for one request. Ban check, window update and
    // ban write run under a single lock, so racing requests for the same
    // client always see a consistent snapshot.
    pub fn check(&self, client: &str, now: Instant) -> Decision {
        let mut state = self.state.lock().unwrap();

        if state.is_banned(client, now) {
            return Decision::Forbidden;
        }

        if state.record_and_check(client, now, self.window, self.limit) {
            state.ban(client, now, self.ban_duration);
            // clear the history so the client starts with a fresh window
            // once the ban lifts, instead of re-triggering immediately
            state.requests.remove(client);
            return Decision::TooManyRequests;
        }

        Decision::Allowed
    }

    // Banlist size; lazily expired entries make this an upper bound
    pub fn active_bans(&self) -> usize {
        self.state.lock().unwrap().banlist.len()
    }
}
