//! # Terminal Loop
//!
//! The single-screen cashier flow as a line-oriented command loop. This is
//! the caller-side layer: it parses input, runs the validators, invokes one
//! command per line, and renders results or inline error messages.

use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::commands::{bill, checkout, login, totals};
use crate::error::AppResult;
use crate::state::AppContext;

/// Prints a prompt and reads one line. `None` on end of input.
pub fn prompt(label: &str) -> AppResult<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Runs the cashier loop until `exit` or end of input.
pub async fn run(ctx: &AppContext) -> AppResult<()> {
    println!("{} — Quick Billing System", ctx.config.store_name);
    println!("Type 'help' for commands, 'menu' for the menu.\n");

    loop {
        let Some(line) = prompt("zweeti> ")? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (line.as_str(), ""),
        };

        let outcome = match command {
            "help" => {
                print_help();
                Ok(())
            }
            "menu" => {
                print_menu(ctx);
                Ok(())
            }
            "add" => handle_add(ctx, rest),
            "remove" => handle_remove(ctx, rest),
            "bill" => {
                print_bill(ctx);
                Ok(())
            }
            "name" => handle_name(ctx, rest),
            "tax" => handle_tax(ctx, rest),
            "clear" => {
                bill::clear_bill(&ctx.session);
                println!("Bill cleared.");
                Ok(())
            }
            "finalize" => handle_finalize(ctx).await,
            "export" => handle_export(ctx),
            "day" => handle_day(ctx, rest).await,
            "resetday" => handle_resetday(ctx, rest).await,
            "logout" => {
                login::sign_out(&ctx.store).await?;
                println!("Signed out. The login gate applies on next start.");
                Ok(())
            }
            "exit" | "quit" => break,
            other => {
                println!("Unknown command '{other}'. Type 'help'.");
                Ok(())
            }
        };

        // Inline error message; the session stays alive
        if let Err(err) = outcome {
            println!("error: {err}");
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  menu                 show the menu");
    println!("  add <item> [qty]     add a line (item = menu name or number)");
    println!("  remove <id>          remove a line by its id");
    println!("  bill                 show the current bill");
    println!("  name [customer]      set the customer name (blank clears)");
    println!("  tax on|off           toggle GST for this bill");
    println!("  clear                discard the current bill");
    println!("  finalize             close the bill and print the receipt");
    println!("  export               write the last receipt to a text file");
    println!("  day [YYYY-M-D]       show a day's sales total (default today)");
    println!("  resetday [YYYY-M-D]  reset a day's sales total");
    println!("  logout               clear the login session");
    println!("  exit                 quit");
}

fn print_menu(ctx: &AppContext) {
    for (position, item) in ctx.catalog.items().iter().enumerate() {
        println!(
            "{:>3}. {} {:<20} {}",
            position + 1,
            item.emoji,
            item.name,
            item.unit_price
        );
    }
}

fn print_bill(ctx: &AppContext) {
    let view = bill::current_bill(&ctx.session);

    if view.lines.is_empty() {
        println!("No items added yet. Use 'add' to start billing.");
        return;
    }

    if let Some(customer) = &view.customer_name {
        println!("Customer: {customer}");
    }
    println!("{:>3}  {:<20} {:>8} {:>5} {:>9}", "Id", "Item", "Price", "Qty", "Total");
    for line in &view.lines {
        println!(
            "{:>3}  {:<20} {:>8} {:>5} {:>9}",
            line.id,
            line.name,
            line.unit_price.to_string(),
            line.quantity,
            line.line_total().to_string()
        );
    }
    println!("  Subtotal: {}", view.totals.subtotal);
    if view.tax_enabled {
        println!("  GST:      {}", view.totals.tax);
    } else {
        println!("  GST:      (disabled)");
    }
    println!("  TOTAL:    {}", view.totals.grand_total);
}

fn handle_add(ctx: &AppContext, rest: &str) -> AppResult<()> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.is_empty() {
        println!("Usage: add <item> [qty]");
        return Ok(());
    }

    // A trailing number is a quantity when the item part is non-empty
    let (name_tokens, quantity) = match tokens.split_last() {
        Some((last, head)) if !head.is_empty() => match last.parse::<i64>() {
            Ok(qty) => (head, qty),
            Err(_) => (&tokens[..], 1),
        },
        _ => (&tokens[..], 1),
    };
    let selector = name_tokens.join(" ");

    // Numbers select by menu position
    let name = match selector.parse::<usize>() {
        Ok(position) => match ctx.catalog.by_position(position) {
            Some(item) => item.name.clone(),
            None => selector,
        },
        Err(_) => selector,
    };

    let line = bill::add_item(&ctx.session, &ctx.catalog, &name, quantity)?;
    println!(
        "Added #{}: {} × {} = {}",
        line.id,
        line.name,
        line.quantity,
        line.line_total()
    );
    Ok(())
}

fn handle_remove(ctx: &AppContext, rest: &str) -> AppResult<()> {
    let Ok(id) = rest.parse::<u64>() else {
        println!("Usage: remove <id>");
        return Ok(());
    };

    if bill::remove_item(&ctx.session, id) {
        println!("Removed line {id}.");
    } else {
        println!("No line with id {id}.");
    }
    Ok(())
}

fn handle_name(ctx: &AppContext, rest: &str) -> AppResult<()> {
    match bill::set_customer_name(&ctx.session, rest)? {
        Some(name) => println!("Billing for: {name}"),
        None => println!("Customer name cleared."),
    }
    Ok(())
}

fn handle_tax(ctx: &AppContext, rest: &str) -> AppResult<()> {
    match rest {
        "on" => {
            bill::set_tax_enabled(&ctx.session, true);
            println!("GST enabled.");
        }
        "off" => {
            bill::set_tax_enabled(&ctx.session, false);
            println!("GST disabled for this bill.");
        }
        _ => println!("Usage: tax on|off"),
    }
    Ok(())
}

async fn handle_finalize(ctx: &AppContext) -> AppResult<()> {
    let receipt = checkout::finalize_bill(&ctx.session, &ctx.store).await?;
    println!("{}", receipt.render_text());
    println!();
    let today_total = totals::day_total(&ctx.store, receipt.date).await?;
    println!("Today's sales so far: {today_total}");
    Ok(())
}

fn handle_export(ctx: &AppContext) -> AppResult<()> {
    let path = checkout::export_receipt(&ctx.session, Path::new("."))?;
    println!("Receipt written to {}", path.display());
    Ok(())
}

async fn handle_day(ctx: &AppContext, rest: &str) -> AppResult<()> {
    let Some(date) = parse_date_arg(rest) else {
        println!("Usage: day [YYYY-M-D]");
        return Ok(());
    };
    let total = totals::day_total(&ctx.store, date).await?;
    println!("Sales total for {}: {}", date.format("%d/%m/%Y"), total);
    Ok(())
}

async fn handle_resetday(ctx: &AppContext, rest: &str) -> AppResult<()> {
    let Some(date) = parse_date_arg(rest) else {
        println!("Usage: resetday [YYYY-M-D]");
        return Ok(());
    };
    totals::reset_day_total(&ctx.store, date).await?;
    println!("Sales total for {} reset.", date.format("%d/%m/%Y"));
    Ok(())
}

/// Empty input means today; otherwise `YYYY-M-D` (padding optional).
fn parse_date_arg(rest: &str) -> Option<NaiveDate> {
    if rest.is_empty() {
        return Some(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(rest, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg_accepts_unpadded() {
        let parsed = parse_date_arg("2024-3-7").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());

        let padded = parse_date_arg("2024-03-07").unwrap();
        assert_eq!(padded, parsed);

        assert!(parse_date_arg("yesterday").is_none());
    }

    #[test]
    fn test_parse_date_arg_empty_is_today() {
        assert_eq!(parse_date_arg("").unwrap(), Local::now().date_naive());
    }
}
