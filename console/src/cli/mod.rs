//! # Command Line
//!
//! `erp-console <command>`: a thin front end over the façade. Every data
//! command runs through an [`crate::app::AsyncOperation`] and prints the
//! normalized rows.

pub mod render;
pub mod run;

use clap::{Parser, Subcommand};
use shared::PaymentMode;

pub use run::{run, Output};

#[derive(Debug, Parser)]
#[command(name = "erp-console", version, about = "ERP field console: customers, collections and reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        /// Office code, e.g. WF01
        #[arg(short, long)]
        office: String,
    },
    /// Forget the session and token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Change the signed-in user's password
    ChangePassword {
        #[arg(short, long)]
        password: String,
    },
    /// List customers
    Customers {
        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(short, long)]
        area: Option<String>,
    },
    /// List collections in a date range (defaults to month to date)
    Collections {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Record a collection
    Collect {
        #[arg(short, long)]
        customer: String,
        #[arg(short, long)]
        amount: String,
        /// cash, cheque or transfer
        #[arg(short, long, default_value = "cash")]
        payment: PaymentMode,
        #[arg(long, default_value = "")]
        cheque_no: String,
        #[arg(long, default_value = "")]
        cheque_date: String,
        #[arg(long, default_value = "")]
        remarks: String,
        /// Customer ledger account; looked up from the customer list when omitted
        #[arg(long)]
        ledger: Option<String>,
        /// Receipt date (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a collection by receipt id
    DeleteCollection {
        #[arg(short, long)]
        receipt: String,
    },
    /// Customer statement (defaults to month to date)
    Statement {
        #[arg(short, long)]
        customer: String,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Credit aging of a customer
    Aging {
        #[arg(short, long)]
        customer: String,
        #[arg(long)]
        days: Option<String>,
        #[arg(long)]
        condition: Option<String>,
    },
    /// Stock levels
    Stocks,
    /// Collection summary and recent collections (defaults to month to date)
    Dashboard {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Sales areas
    Areas,
}
