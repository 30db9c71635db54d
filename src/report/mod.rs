use crate::{account::Account, amount::format_amount};

pub mod table;

pub use table::render_account;

/// Width of the widest formatted amount over every balance of every account.
///
/// Accounts that end up skipped while rendering still count, so that all
/// printed tables share a single amount column width.
pub fn width_for<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> usize {
    accounts
        .into_iter()
        .flat_map(|acc| acc.balances.iter())
        .map(|balance| format_amount(&balance.amount.to_string()).len())
        .max()
        .unwrap_or(0)
}

/// Full report: bot tables in the given order, then the whale table.
pub fn render_report(bots: &[Account], whale: &Account) -> String {
    let width = width_for(bots.iter().chain(std::iter::once(whale)));

    let mut out = String::from("\nBots Balances:\n");
    for bot in bots {
        out.push_str(&render_account(bot, width));
    }
    out.push_str("\nWhale Balances:\n");
    out.push_str(&render_account(whale, width));
    out.push('\n');
    out
}
