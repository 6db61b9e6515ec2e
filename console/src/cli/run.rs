//! Command dispatch.
//!
//! Local problems (not logged in, invalid input, storage) come back as `Err`.
//! Backend failures are rendered: the command still completes and reports
//! through [`Output::success`].

use chrono::Local;
use futures::FutureExt;
use lib_utils::{month_to_date, today_ymd, validate_not_empty};
use shared::{
    ChangePasswordRequest, CollectionsRequest, CreditAgingRequest, CustomersRequest,
    DashboardRequest, DeleteCollectionRequest, Envelope, NewCollectionRequest, PaymentMode,
    StatementRequest,
};

use super::{render, Command};
use crate::app::context::{AppContext, ScreenContext};
use crate::app::operation::{OperationState, GENERIC_ERROR};
use crate::app::screen::ListView;
use crate::core::error::{ApiError, Result};
use crate::normalize::customers::filter;
use crate::normalize::{
    AgingLine, Area, Collection, Customer, DashboardSummary, Normalize, RecentCollection,
    StatementLine, StockLine,
};
use crate::services::api::{auth, collections, master, reports, sales};
use crate::utils::{validate_collection, validate_date_range};

/// What a command prints, and whether it counts as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    pub success: bool,
}

impl Output {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

pub async fn run(ctx: &AppContext, command: Command) -> Result<Output> {
    match command {
        Command::Login {
            username,
            password,
            office,
        } => Ok(match ctx.session().login(&username, &password, &office).await {
            Ok(session) => Output::ok(format!("Logged in.\n{}", render::session(&session))),
            Err(ApiError::Validation(message)) => return Err(ApiError::Validation(message)),
            Err(e) => Output::failed(e.to_string()),
        }),
        Command::Logout => {
            ctx.session().logout()?;
            Ok(Output::ok("Logged out."))
        }
        Command::Whoami => match ctx.session().session() {
            Some(session) => Ok(Output::ok(render::session(&session))),
            None => Ok(Output::failed(crate::app::context::NOT_LOGGED_IN)),
        },
        Command::ChangePassword { password } => change_password(ctx, password).await,
        Command::Customers { search, area } => customers(ctx, &search, area.as_deref()).await,
        Command::Collections { from, to } => list_collections(ctx, from, to).await,
        Command::Collect {
            customer,
            amount,
            payment,
            cheque_no,
            cheque_date,
            remarks,
            ledger,
            date,
        } => {
            let entry = CollectionEntry {
                customer,
                amount,
                payment,
                cheque_no,
                cheque_date,
                remarks,
                ledger,
                date,
            };
            collect(ctx, entry).await
        }
        Command::DeleteCollection { receipt } => delete_collection(ctx, receipt).await,
        Command::Statement { customer, from, to } => statement(ctx, customer, from, to).await,
        Command::Aging {
            customer,
            days,
            condition,
        } => aging(ctx, customer, days, condition).await,
        Command::Stocks => stocks(ctx).await,
        Command::Dashboard { from, to } => dashboard(ctx, from, to).await,
        Command::Areas => areas(ctx).await,
    }
}

// region:    --- Helpers

/// Run one bound façade call to completion and return the hook's final state.
macro_rules! fetch {
    ($ctx:expr, $request:expr, |$client:ident, $req:ident| $call:expr) => {{
        let request = $request;
        let hook = $ctx.operation(move |$client| {
            let $req = request.clone();
            async move { $call.await }.boxed()
        });
        hook.execute().await;
        hook.state()
    }};
}

fn present<T>(view: ListView<T>, table: impl FnOnce(&[T]) -> String) -> Output {
    match view {
        ListView::Ready(rows) => Output::ok(table(&rows)),
        ListView::Empty(message) => Output::ok(message),
        ListView::Failed { message, .. } => Output::failed(message),
        ListView::Loading => Output::failed(GENERIC_ERROR),
    }
}

/// Outcome of a write call: the backend's own message when it sent one.
fn acknowledge(state: &OperationState<Envelope>, fallback: &str) -> Output {
    match (&state.data, &state.error) {
        (Some(envelope), _) => Output::ok(envelope.message().unwrap_or_else(|| fallback.to_string())),
        (None, Some(message)) => Output::failed(message.clone()),
        (None, None) => Output::failed(GENERIC_ERROR),
    }
}

/// Explicit range, or month to date.
fn date_range(from: Option<String>, to: Option<String>) -> Result<(String, String)> {
    let (month_start, today) = month_to_date(Local::now().date_naive());
    let from = from.unwrap_or(month_start);
    let to = to.unwrap_or(today);
    validate_date_range(&from, &to)
        .into_result()
        .map_err(ApiError::Validation)?;
    Ok((from, to))
}

// endregion: --- Helpers

async fn change_password(ctx: &AppContext, password: String) -> Result<Output> {
    validate_not_empty(&password, "Password").map_err(ApiError::Validation)?;
    let session = ctx
        .session()
        .session()
        .ok_or_else(|| ApiError::Validation(crate::app::context::NOT_LOGGED_IN.to_string()))?;

    let request = ChangePasswordRequest {
        username: session.username,
        password,
        officecode: session.office_code,
        officeid: session.office_id,
    };
    let state = fetch!(ctx, request, |client, req| auth::change_password(&client, &req));
    Ok(acknowledge(&state, "Password changed."))
}

async fn customers(ctx: &AppContext, search: &str, area: Option<&str>) -> Result<Output> {
    let screen = ctx.screen()?;
    let request = customers_request(&screen);
    let state = fetch!(ctx, request, |client, req| sales::get_customers(&client, &req));

    let view = ListView::from_state(&state, |envelope| {
        filter(&Customer::list(envelope), search, area)
            .into_iter()
            .cloned()
            .collect()
    });
    Ok(present(view, render::customers))
}

fn customers_request(screen: &ScreenContext) -> CustomersRequest {
    CustomersRequest {
        scope: screen.scope(),
        empid: screen.user_id.clone(),
    }
}

async fn list_collections(ctx: &AppContext, from: Option<String>, to: Option<String>) -> Result<Output> {
    let screen = ctx.screen()?;
    let (sdate, edate) = date_range(from, to)?;
    let request = CollectionsRequest {
        scope: screen.scope(),
        empid: screen.user_id.clone(),
        sdate,
        edate,
    };
    let state = fetch!(ctx, request, |client, req| collections::get_collections(&client, &req));
    Ok(present(
        ListView::from_state(&state, Collection::list),
        render::collections,
    ))
}

struct CollectionEntry {
    customer: String,
    amount: String,
    payment: PaymentMode,
    cheque_no: String,
    cheque_date: String,
    remarks: String,
    ledger: Option<String>,
    date: Option<String>,
}

async fn collect(ctx: &AppContext, entry: CollectionEntry) -> Result<Output> {
    let screen = ctx.screen()?;
    validate_not_empty(&entry.customer, "Customer").map_err(ApiError::Validation)?;
    validate_collection(&entry.amount, entry.payment, &entry.cheque_no)
        .into_result()
        .map_err(ApiError::Validation)?;

    let custledger = match entry.ledger {
        Some(ledger) => ledger,
        None => match customer_ledger(ctx, &screen, &entry.customer).await? {
            Ok(ledger) => ledger,
            Err(output) => return Ok(output),
        },
    };

    let request = NewCollectionRequest {
        scope: screen.scope(),
        rdate: entry.date.unwrap_or_else(today_ymd),
        empid: screen.user_id.clone(),
        payment: entry.payment,
        amount: entry.amount,
        customerid: entry.customer,
        chequeno: entry.cheque_no,
        chequedate: entry.cheque_date,
        remarks: entry.remarks,
        custledger,
    };
    let state = fetch!(ctx, request, |client, req| collections::create_collection(&client, &req));
    Ok(acknowledge(&state, "Collection saved."))
}

/// Ledger account of `customer_id`, looked up in the customer list.
///
/// The inner `Err` is a rendered backend failure to report as is.
async fn customer_ledger(
    ctx: &AppContext,
    screen: &ScreenContext,
    customer_id: &str,
) -> Result<std::result::Result<String, Output>> {
    let request = customers_request(screen);
    let state = fetch!(ctx, request, |client, req| sales::get_customers(&client, &req));

    let customers = match ListView::from_state(&state, Customer::list) {
        ListView::Ready(rows) => rows,
        ListView::Failed { message, .. } => return Ok(Err(Output::failed(message))),
        _ => Vec::new(),
    };

    let customer = customers
        .into_iter()
        .find(|c| c.id == customer_id)
        .ok_or_else(|| ApiError::Validation(format!("Unknown customer: {customer_id}")))?;

    customer.ledger.map(Ok).ok_or_else(|| {
        ApiError::Validation(format!(
            "Customer {customer_id} has no ledger account; pass --ledger"
        ))
    })
}

async fn delete_collection(ctx: &AppContext, receipt: String) -> Result<Output> {
    let screen = ctx.screen()?;
    validate_not_empty(&receipt, "Receipt").map_err(ApiError::Validation)?;
    let request = DeleteCollectionRequest {
        scope: screen.scope(),
        receiptid: receipt,
    };
    let state = fetch!(ctx, request, |client, req| collections::delete_collection(&client, &req));
    Ok(acknowledge(&state, "Collection deleted."))
}

async fn statement(
    ctx: &AppContext,
    customer: String,
    from: Option<String>,
    to: Option<String>,
) -> Result<Output> {
    let screen = ctx.screen()?;
    let (sdate, edate) = date_range(from, to)?;
    let request = StatementRequest {
        scope: screen.scope(),
        customerid: customer,
        sdate,
        edate,
    };
    let state = fetch!(ctx, request, |client, req| reports::get_customer_statement(&client, &req));
    Ok(present(
        ListView::from_state(&state, StatementLine::list),
        render::statement,
    ))
}

async fn aging(
    ctx: &AppContext,
    customer: String,
    days: Option<String>,
    condition: Option<String>,
) -> Result<Output> {
    let screen = ctx.screen()?;
    let request = CreditAgingRequest {
        scope: screen.scope(),
        customerid: customer,
        noofdays: days,
        condition,
    };
    let state = fetch!(ctx, request, |client, req| reports::get_credit_aging_report(&client, &req));
    Ok(present(ListView::from_state(&state, AgingLine::list), render::aging))
}

async fn stocks(ctx: &AppContext) -> Result<Output> {
    let scope = ctx.screen()?.scope();
    let state = fetch!(ctx, scope, |client, req| reports::get_stocks(&client, &req));
    Ok(present(ListView::from_state(&state, StockLine::list), render::stocks))
}

async fn dashboard(ctx: &AppContext, from: Option<String>, to: Option<String>) -> Result<Output> {
    let screen = ctx.screen()?;
    let (sdate, edate) = date_range(from, to)?;
    let request = DashboardRequest {
        scope: screen.scope(),
        empid: screen.user_id.clone(),
        sdate,
        edate,
    };
    let state = fetch!(ctx, request, |client, req| reports::get_user_dashboard(&client, &req));

    let Some(envelope) = &state.data else {
        return Ok(present(ListView::from_state(&state, RecentCollection::list), render::recent_collections));
    };

    let summary = render::dashboard_summary(&DashboardSummary::from_envelope(envelope));
    let recent = RecentCollection::list(envelope);
    Ok(if recent.is_empty() {
        Output::ok(summary)
    } else {
        Output::ok(format!("{summary}\n\n{}", render::recent_collections(&recent)))
    })
}

async fn areas(ctx: &AppContext) -> Result<Output> {
    let office = ctx.screen()?.office();
    let state = fetch!(ctx, office, |client, req| master::get_areas(&client, &req));
    Ok(present(ListView::from_state(&state, Area::list), render::areas))
}
