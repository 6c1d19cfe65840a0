//! Verification code lifecycle: issue with cooldown, one-shot verify, remove.

use crate::error::{VerificationError, VerificationResult};
use crate::models::VerifyCodeEmail;
use crate::store::{InsertOutcome, TtlStore};
use chrono::{SecondsFormat, TimeDelta, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Length of generated codes.
pub const CODE_LENGTH: usize = 6;

/// Lifetimes for codes and resend cooldowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationConfig {
    /// How long an issued code stays verifiable.
    pub expire: Duration,
    /// Minimum wait between two codes for the same recipient.
    pub interval: Duration,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            expire: Duration::from_secs(5 * 60),
            interval: Duration::from_secs(60),
        }
    }
}

/// Stored under the recipient key in the code store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedCode {
    pub cid: i32,
    pub code: String,
}

/// Stored under the recipient key in the cooldown store. Only its presence matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownMark {
    /// Unix seconds.
    pub issued_at: i64,
}

/// Owns the code and cooldown stores. Nothing else reads or writes them.
pub struct CodeManager {
    codes: Arc<dyn TtlStore<IssuedCode>>,
    cooldowns: Arc<dyn TtlStore<CooldownMark>>,
    config: VerificationConfig,
}

impl CodeManager {
    pub fn new(
        codes: Arc<dyn TtlStore<IssuedCode>>,
        cooldowns: Arc<dyn TtlStore<CooldownMark>>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            codes,
            cooldowns,
            config,
        }
    }

    /// Issue a fresh code for `recipient`, replacing any unconsumed one.
    ///
    /// The cooldown mark is claimed atomically before the code is written, so
    /// concurrent calls for the same recipient yield exactly one code.
    #[instrument(skip(self), fields(recipient = %recipient))]
    pub async fn generate(&self, recipient: &str, cid: i32) -> VerificationResult<VerifyCodeEmail> {
        let key = recipient.to_lowercase();
        let mark = CooldownMark {
            issued_at: Utc::now().timestamp(),
        };

        if let InsertOutcome::Occupied { remaining } = self
            .cooldowns
            .insert_if_absent(&key, mark, self.config.interval)
            .await?
        {
            debug!(remaining_ms = remaining.as_millis() as u64, "Code requested during cooldown");
            return Err(VerificationError::Cooldown { remaining });
        }

        let code = random_code();
        let entry = IssuedCode {
            cid,
            code: code.clone(),
        };
        if let Err(e) = self.codes.set(&key, entry, self.config.expire).await {
            error!(error = %e, "Failed to store verification code");
            if let Err(e) = self.cooldowns.remove(&key).await {
                error!(error = %e, "Failed to release cooldown after store failure");
            }
            return Err(e.into());
        }

        let now = Utc::now();
        let expired_at = TimeDelta::from_std(self.config.expire)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(now);

        info!("Verification code issued");

        Ok(VerifyCodeEmail {
            cid: format!("{:04}", cid),
            code,
            expired: expiry_minutes(self.config.expire),
            expired_at: expired_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Check `code` and `cid` against the live code for `recipient` and consume it.
    ///
    /// A mismatch leaves the code in place. The cooldown is left untouched.
    #[instrument(skip(self, code), fields(recipient = %recipient))]
    pub async fn verify(&self, recipient: &str, code: &str, cid: i32) -> VerificationResult<()> {
        let key = recipient.to_lowercase();
        let Some(entry) = self.codes.get(&key).await? else {
            debug!("No live verification code");
            return Err(VerificationError::Expired);
        };

        if entry.code != code || entry.cid != cid {
            debug!("Verification code mismatch");
            return Err(VerificationError::Invalid);
        }

        // Consume only the entry that was compared; a code issued meanwhile survives.
        if !self.codes.remove_if_eq(&key, &entry).await? {
            debug!("Verification code consumed or replaced concurrently");
            return Err(VerificationError::Expired);
        }

        info!("Verification code accepted");
        Ok(())
    }

    /// Invalidate any live code for `recipient`. The cooldown is kept.
    #[instrument(skip(self), fields(recipient = %recipient))]
    pub async fn remove(&self, recipient: &str) -> VerificationResult<()> {
        let removed = self.codes.remove(&recipient.to_lowercase()).await?;
        debug!(removed, "Verification code removed");
        Ok(())
    }

    /// Reachability of both stores.
    pub async fn health_check(&self) -> VerificationResult<()> {
        self.codes.ping().await?;
        self.cooldowns.ping().await?;
        Ok(())
    }
}

/// Whole minutes shown in the mail, rounded half to even (90s is "2", 30s is "0").
fn expiry_minutes(expire: Duration) -> String {
    format!("{:.0}", (expire.as_secs_f64() / 60.0).round_ties_even())
}

fn random_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
