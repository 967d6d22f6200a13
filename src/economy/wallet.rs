use bevy::prelude::*;
use crate::shared::*;

/// Running totals for the session, kept for the HUD log line.
#[derive(Resource, Debug, Clone, Default)]
pub struct EconomyStats {
    pub total_gold_earned: u64,
    pub total_gold_spent: u64,
    pub total_transactions: u64,
}

/// Credits the wallet and announces the new balance.
pub fn pay(
    wallet: &mut Wallet,
    amount: u32,
    reason: impl Into<String>,
    writer: &mut EventWriter<MoneyChangedEvent>,
) -> u32 {
    let balance = wallet.credit(amount);
    writer.send(MoneyChangedEvent {
        balance,
        delta: amount as i64,
        reason: reason.into(),
    });
    balance
}

/// Debits only when the balance covers `amount`. Nothing is sent on refusal.
pub fn charge(
    wallet: &mut Wallet,
    amount: u32,
    reason: impl Into<String>,
    writer: &mut EventWriter<MoneyChangedEvent>,
) -> bool {
    if !wallet.try_debit(amount) {
        return false;
    }
    writer.send(MoneyChangedEvent {
        balance: wallet.gold,
        delta: -(amount as i64),
        reason: reason.into(),
    });
    true
}

/// Folds every MoneyChangedEvent into EconomyStats and logs it.
pub fn track_money_changes(
    mut events: EventReader<MoneyChangedEvent>,
    mut stats: ResMut<EconomyStats>,
) {
    for ev in events.read() {
        if ev.delta >= 0 {
            stats.total_gold_earned = stats.total_gold_earned.saturating_add(ev.delta as u64);
            info!(
                "[Economy] +{}: {}. New balance: {}",
                format_money(ev.delta as u32),
                ev.reason,
                format_money(ev.balance)
            );
        } else {
            stats.total_gold_spent = stats.total_gold_spent.saturating_add(ev.delta.unsigned_abs());
            info!(
                "[Economy] -{}: {}. New balance: {}",
                format_money(ev.delta.unsigned_abs() as u32),
                ev.reason,
                format_money(ev.balance)
            );
        }
        stats.total_transactions += 1;
    }
}
