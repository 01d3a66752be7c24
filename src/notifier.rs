//! Telegram notification delivery
//!
//! The poll loop talks to Telegram only through the [`Notify`] trait, so
//! tests can swap the real bot for a recording double. Delivery problems are
//! reported as a plain `false` and logged here; they must never abort the
//! polling process.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;

/// Delivery seam between the poll loop and Telegram.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Sends `text` to the configured chat. Returns whether delivery
    /// succeeded; implementations log failures themselves.
    async fn notify(&self, text: &str) -> bool;
}

/// Production notifier backed by the Telegram Bot API.
pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat: Recipient) -> Self {
        Self { bot, chat }
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn notify(&self, text: &str) -> bool {
        match self.bot.send_message(self.chat.clone(), text).await {
            Ok(_) => {
                log::debug!("Бот отправил сообщение: {text}");
                true
            }
            Err(e) => {
                log::error!("Сбой при отправке сообщения в Telegram: {e}");
                false
            }
        }
    }
}
