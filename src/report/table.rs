use crate::{account::Account, amount::format_amount};

/// Width reserved for the denom column.
pub const DENOM_COLUMN_WIDTH: usize = 68;

/// Renders the balance table of a single account, using `width` for the
/// amount column. Accounts without any non-zero balance render nothing.
pub fn render_account(account: &Account, width: usize) -> String {
    if account.balances.is_zero() {
        return String::new();
    }

    let banner = format!("| - {}: {} |", account.name, account.address);

    let mut out = String::new();
    out.push_str(&"=".repeat(width + DENOM_COLUMN_WIDTH + 3));
    out.push('\n');
    out.push_str(&banner);
    out.push('\n');
    out.push_str(&"-".repeat(banner.chars().count()));
    out.push('\n');
    out.push_str(&format!("{:>width$} | Denom\n", "Amount"));
    out.push_str(&format!(
        "{} | {}\n",
        "-".repeat(width),
        "-".repeat(DENOM_COLUMN_WIDTH)
    ));
    for balance in &account.balances {
        out.push_str(&format!(
            "{:>width$} | {}\n",
            format_amount(&balance.amount.to_string()),
            balance.denom
        ));
    }
    out.push('\n');
    out
}
