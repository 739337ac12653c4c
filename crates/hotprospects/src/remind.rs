//! Reminder scheduling.
//!
//! A reminder is a one-shot alert ("Contact <name>") delivered after a fixed
//! delay. Delivery goes through a [`Notifier`], which also owns the
//! authorization state: reminders are only scheduled once the notifier says
//! they are allowed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::prospect::Prospect;

/// Whether the notifier may deliver alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    NotDetermined,
    /// The user refused.
    Denied,
    /// Alerts may be delivered.
    Authorized,
}

/// A one-shot alert about a prospect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Fresh identifier; every scheduling call gets its own.
    pub id: Uuid,
    /// Alert title.
    pub title: String,
    /// Alert subtitle.
    pub subtitle: String,
    /// Whether to play the default sound.
    pub sound: bool,
    /// Delay before delivery.
    pub delay: Duration,
}

impl Reminder {
    /// Build the reminder for a prospect.
    #[must_use]
    pub fn for_prospect(prospect: &Prospect, delay: Duration, sound: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: format!("Contact {}", prospect.name),
            subtitle: prospect.email_address.clone(),
            sound,
            delay,
        }
    }
}

/// Outcome of [`schedule_reminder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// The reminder was handed to the notifier.
    Scheduled(Uuid),
    /// Authorization was refused; nothing was scheduled.
    Denied,
}

/// A service that delivers alerts.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Current authorization state.
    async fn authorization_status(&self) -> AuthorizationStatus;

    /// Ask for authorization. Returns whether it was granted.
    ///
    /// # Errors
    ///
    /// Returns an error if the request itself could not be made.
    async fn request_authorization(&self) -> Result<bool>;

    /// Schedule a reminder for delivery after its delay.
    ///
    /// # Errors
    ///
    /// Returns an error if the notifier cannot accept the reminder.
    async fn add(&self, reminder: Reminder) -> Result<()>;
}

/// Schedule a reminder about `prospect`, asking for authorization first if
/// the notifier does not have it yet.
///
/// Repeated calls schedule independent reminders.
///
/// # Errors
///
/// Returns an error only if the notifier fails to accept an authorized
/// reminder. A refused or failed authorization request is logged and
/// reported as [`ScheduleOutcome::Denied`].
pub async fn schedule_reminder(
    notifier: &dyn Notifier,
    prospect: &Prospect,
    delay: Duration,
    sound: bool,
) -> Result<ScheduleOutcome> {
    let authorized = match notifier.authorization_status().await {
        AuthorizationStatus::Authorized => true,
        status => {
            debug!("Notifier status is {:?}, requesting authorization", status);
            match notifier.request_authorization().await {
                Ok(granted) => granted,
                Err(e) => {
                    warn!("Authorization request failed: {}", e);
                    false
                }
            }
        }
    };

    if !authorized {
        warn!("Won't show the notifications");
        return Ok(ScheduleOutcome::Denied);
    }

    let reminder = Reminder::for_prospect(prospect, delay, sound);
    let id = reminder.id;
    notifier.add(reminder).await?;
    info!("Scheduled reminder {} for prospect {}", id, prospect.id());
    Ok(ScheduleOutcome::Scheduled(id))
}

/// Delivers reminders to the terminal from background tasks.
///
/// Authorization starts undetermined; a request is granted when the notifier
/// was built with `allow_notifications = true`. Must be used inside a tokio
/// runtime.
#[derive(Debug)]
pub struct TerminalNotifier {
    allow_notifications: bool,
    status: Mutex<AuthorizationStatus>,
    pending: Mutex<Vec<JoinHandle<()>>>,
    delivered: Arc<AtomicUsize>,
}

impl TerminalNotifier {
    /// Create a notifier.
    #[must_use]
    pub fn new(allow_notifications: bool) -> Self {
        Self {
            allow_notifications,
            status: Mutex::new(AuthorizationStatus::NotDetermined),
            pending: Mutex::new(Vec::new()),
            delivered: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of reminders delivered so far.
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.delivered.load(Ordering::SeqCst)
    }

    /// Wait until every scheduled reminder has been delivered.
    pub async fn wait_pending(&self) {
        let handles = std::mem::take(
            &mut *self
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );

        for handle in handles {
            if let Err(e) = handle.await {
                warn!("Reminder task failed: {}", e);
            }
        }
    }
}

#[async_trait::async_trait]
impl Notifier for TerminalNotifier {
    async fn authorization_status(&self) -> AuthorizationStatus {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn request_authorization(&self) -> Result<bool> {
        let granted = self.allow_notifications;
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = if granted {
            AuthorizationStatus::Authorized
        } else {
            AuthorizationStatus::Denied
        };
        Ok(granted)
    }

    async fn add(&self, reminder: Reminder) -> Result<()> {
        let delivered = Arc::clone(&self.delivered);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(reminder.delay).await;
            let bell = if reminder.sound { "\x07" } else { "" };
            println!("{bell}{}", reminder.title);
            if !reminder.subtitle.is_empty() {
                println!("  {}", reminder.subtitle);
            }
            delivered.fetch_add(1, Ordering::SeqCst);
            debug!("Delivered reminder {}", reminder.id);
        });

        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handle);
        Ok(())
    }
}
