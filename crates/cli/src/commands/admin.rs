//! Admin console pages: login, pricing plan CRUD, settings, users.
//!
//! Every mutation follows the console's re-fetch discipline: on success the
//! full listing is fetched again rather than patched locally.

use clap::{Args, Subcommand};
use uuid::Uuid;

use insights_snap_client::{ApiClient, Notification, PlanForm};
use insights_snap_core::{
    BillingPeriod, CreditUpdate, PaymentCredentials, PaymentSettingsUpdate, Scope,
    SeoSettingsUpdate, Session,
};

use super::{CliError, CommandOutcome, confirm, report_failure, require_session, user};

#[derive(Subcommand)]
pub enum AdminAction {
    /// Sign in to the admin console
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out of the admin scope
    Logout,
    /// Manage pricing plans
    Plans {
        #[command(subcommand)]
        action: PlanAction,
    },
    /// Manage payment gateway settings
    Payments {
        #[command(subcommand)]
        action: PaymentAction,
    },
    /// Manage per-page SEO settings
    Seo {
        #[command(subcommand)]
        action: SeoAction,
    },
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// List all plans, active or not
    List,
    /// Create a plan
    Create {
        #[command(flatten)]
        form: PlanFormArgs,
    },
    /// Update a plan by id
    Update {
        #[arg(long)]
        id: Uuid,
        #[command(flatten)]
        form: PlanFormArgs,
    },
    /// Delete a plan by id (asks for confirmation)
    Delete {
        #[arg(long)]
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// The plan dialog's fields, as free text plus toggles.
#[derive(Args)]
pub struct PlanFormArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    price: String,
    /// month, year, or forever
    #[arg(long, default_value = "month")]
    billing: String,
    #[arg(long, default_value = "")]
    trial_info: String,
    /// One feature per line (embed newlines)
    #[arg(long, default_value = "")]
    features: String,
    #[arg(long, default_value = "0")]
    searches_per_day: String,
    #[arg(long, default_value = "0")]
    ai_generations: String,
    #[arg(long, default_value = "0")]
    exports_per_month: String,
    #[arg(long, default_value = "0")]
    results_per_category: String,
    #[arg(long)]
    popular: bool,
    /// Mark the plan inactive (plans are active by default)
    #[arg(long)]
    inactive: bool,
}

#[derive(Subcommand)]
pub enum PaymentAction {
    /// Show gateway configuration
    Get,
    /// Replace one gateway's settings
    Set {
        /// razorpay or paypal
        #[arg(long)]
        gateway: String,
        #[arg(long)]
        enabled: bool,
        #[arg(long)]
        key_id: Option<String>,
        #[arg(long)]
        key_secret: Option<String>,
        #[arg(long)]
        client_id: Option<String>,
        #[arg(long)]
        client_secret: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum SeoAction {
    /// List SEO settings for every page
    List,
    /// Create or replace one page's SEO settings
    Set {
        #[arg(long)]
        page: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Comma-separated keywords
        #[arg(long, default_value = "")]
        keywords: String,
        #[arg(long)]
        canonical: String,
        #[arg(long)]
        og_image: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// List registered users
    List,
    /// Adjust one user's remaining credits
    SetCredits {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        searches: Option<i64>,
        #[arg(long)]
        ai_generations: Option<i64>,
        #[arg(long)]
        exports: Option<i64>,
    },
}

pub async fn run(client: &ApiClient, action: AdminAction) -> Result<CommandOutcome, CliError> {
    let outcome = match action {
        AdminAction::Login { username, password } => login(client, &username, &password).await,
        AdminAction::Logout => logout(client)?,
        AdminAction::Plans { action } => match action {
            PlanAction::List => list_plans(client).await,
            PlanAction::Create { form } => create_plan(client, form).await,
            PlanAction::Update { id, form } => update_plan(client, id, form).await,
            PlanAction::Delete { id, yes } => delete_plan(client, id, yes).await?,
        },
        AdminAction::Payments { action } => match action {
            PaymentAction::Get => payment_settings(client).await,
            PaymentAction::Set {
                gateway,
                enabled,
                key_id,
                key_secret,
                client_id,
                client_secret,
            } => {
                let update = PaymentSettingsUpdate {
                    gateway,
                    enabled,
                    credentials: PaymentCredentials {
                        key_id,
                        key_secret,
                        client_id,
                        client_secret,
                    },
                };
                update_payment_settings(client, &update).await
            }
        },
        AdminAction::Seo { action } => match action {
            SeoAction::List => list_seo(client).await,
            SeoAction::Set {
                page,
                title,
                description,
                keywords,
                canonical,
                og_image,
            } => {
                let update = SeoSettingsUpdate {
                    title,
                    description,
                    keywords: split_keywords(&keywords),
                    canonical,
                    og_image,
                };
                update_seo(client, &page, &update).await
            }
        },
        AdminAction::Users { action } => match action {
            UserAction::List => list_users(client).await,
            UserAction::SetCredits {
                id,
                searches,
                ai_generations,
                exports,
            } => {
                let update = CreditUpdate {
                    searches_remaining: searches,
                    ai_generations_remaining: ai_generations,
                    exports_remaining: exports,
                };
                set_credits(client, id, &update).await
            }
        },
    };
    Ok(outcome)
}

/// The admin login page.
async fn login(client: &ApiClient, username: &str, password: &str) -> CommandOutcome {
    match client.admin_login(username, password).await {
        Ok(resp) => {
            if let Err(e) = client.sessions().set(Scope::Admin, &Session::from(resp)) {
                tracing::warn!(error = %e, "logged in but session not persisted");
            }
            println!("{}", Notification::success("Logged in successfully!"));
            println!("-> {}", Scope::Admin.home_route());
            CommandOutcome::Done
        }
        Err(err) => {
            println!("{}", Notification::for_error(&err, "Login failed"));
            CommandOutcome::Failed
        }
    }
}

/// The admin layout's logout action.
fn logout(client: &ApiClient) -> Result<CommandOutcome, CliError> {
    client.sessions().clear(Scope::Admin)?;
    println!("signed out");
    println!("-> {}", Scope::Admin.login_route());
    Ok(CommandOutcome::Done)
}

async fn list_plans(client: &ApiClient) -> CommandOutcome {
    if require_session(client, Scope::Admin).is_none() {
        return CommandOutcome::Failed;
    }
    match client.admin_plans().await {
        Ok(plans) => {
            user::print_plans(&plans);
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to fetch pricing plans");
            CommandOutcome::Failed
        }
    }
}

async fn create_plan(client: &ApiClient, form: PlanFormArgs) -> CommandOutcome {
    if require_session(client, Scope::Admin).is_none() {
        return CommandOutcome::Failed;
    }
    let payload = match build_payload(form) {
        Ok(payload) => payload,
        Err(note) => {
            println!("{note}");
            return CommandOutcome::Failed;
        }
    };
    match client.admin_create_plan(&payload).await {
        Ok(_) => {
            println!("{}", Notification::success("Plan created successfully"));
            refresh_plans(client).await
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to save plan");
            CommandOutcome::Failed
        }
    }
}

async fn update_plan(client: &ApiClient, id: Uuid, form: PlanFormArgs) -> CommandOutcome {
    if require_session(client, Scope::Admin).is_none() {
        return CommandOutcome::Failed;
    }
    let payload = match build_payload(form) {
        Ok(payload) => payload,
        Err(note) => {
            println!("{note}");
            return CommandOutcome::Failed;
        }
    };
    match client.admin_update_plan(id, &payload).await {
        Ok(_) => {
            println!("{}", Notification::success("Plan updated successfully"));
            refresh_plans(client).await
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to save plan");
            CommandOutcome::Failed
        }
    }
}

async fn delete_plan(client: &ApiClient, id: Uuid, yes: bool) -> Result<CommandOutcome, CliError> {
    if require_session(client, Scope::Admin).is_none() {
        return Ok(CommandOutcome::Failed);
    }
    // Destructive: confirm before issuing any request.
    if !yes && !confirm("Are you sure you want to delete this plan?")? {
        println!("aborted, nothing deleted");
        return Ok(CommandOutcome::Done);
    }
    match client.admin_delete_plan(id).await {
        Ok(_) => {
            println!("{}", Notification::success("Plan deleted successfully"));
            Ok(refresh_plans(client).await)
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to delete plan");
            Ok(CommandOutcome::Failed)
        }
    }
}

/// Post-mutation re-fetch of the full plan listing.
async fn refresh_plans(client: &ApiClient) -> CommandOutcome {
    match client.admin_plans().await {
        Ok(plans) => {
            user::print_plans(&plans);
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to fetch pricing plans");
            CommandOutcome::Failed
        }
    }
}

async fn payment_settings(client: &ApiClient) -> CommandOutcome {
    if require_session(client, Scope::Admin).is_none() {
        return CommandOutcome::Failed;
    }
    match client.admin_payment_settings().await {
        Ok(view) => {
            println!(
                "razorpay: {} (key: {})",
                if view.razorpay.enabled { "enabled" } else { "disabled" },
                view.razorpay.key_id.as_deref().unwrap_or("-")
            );
            println!(
                "paypal: {} (client: {})",
                if view.paypal.enabled { "enabled" } else { "disabled" },
                view.paypal.client_id.as_deref().unwrap_or("-")
            );
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to fetch payment settings");
            CommandOutcome::Failed
        }
    }
}

async fn update_payment_settings(
    client: &ApiClient,
    update: &PaymentSettingsUpdate,
) -> CommandOutcome {
    if require_session(client, Scope::Admin).is_none() {
        return CommandOutcome::Failed;
    }
    match client.admin_update_payment_settings(update).await {
        Ok(_) => {
            println!("{}", Notification::success("Payment settings updated"));
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to update payment settings");
            CommandOutcome::Failed
        }
    }
}

async fn list_seo(client: &ApiClient) -> CommandOutcome {
    if require_session(client, Scope::Admin).is_none() {
        return CommandOutcome::Failed;
    }
    match client.admin_seo_settings().await {
        Ok(settings) => {
            for seo in settings {
                println!("{}: {}", seo.page, seo.title);
            }
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to fetch SEO settings");
            CommandOutcome::Failed
        }
    }
}

async fn update_seo(
    client: &ApiClient,
    page: &str,
    update: &SeoSettingsUpdate,
) -> CommandOutcome {
    if require_session(client, Scope::Admin).is_none() {
        return CommandOutcome::Failed;
    }
    match client.admin_update_seo_settings(page, update).await {
        Ok(_) => {
            println!("{}", Notification::success("SEO settings updated"));
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to update SEO settings");
            CommandOutcome::Failed
        }
    }
}

async fn list_users(client: &ApiClient) -> CommandOutcome {
    if require_session(client, Scope::Admin).is_none() {
        return CommandOutcome::Failed;
    }
    match client.admin_users().await {
        Ok(users) => {
            for user in users {
                println!(
                    "{} <{}> - plan: {}, searches left: {}",
                    user.name, user.email, user.plan, user.credits.searches_remaining
                );
                println!("  id: {}", user.id);
            }
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to fetch users");
            CommandOutcome::Failed
        }
    }
}

async fn set_credits(client: &ApiClient, id: Uuid, update: &CreditUpdate) -> CommandOutcome {
    if require_session(client, Scope::Admin).is_none() {
        return CommandOutcome::Failed;
    }
    match client.admin_update_user_credits(id, update).await {
        Ok(_) => {
            println!("{}", Notification::success("Credits updated"));
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::Admin, &err, "Failed to update credits");
            CommandOutcome::Failed
        }
    }
}

/// Map the form's flags onto the shared plan form and run the transform.
/// Validation failures come back as a ready-to-print error notification.
fn build_payload(
    form: PlanFormArgs,
) -> Result<insights_snap_core::NewPricingPlan, Notification> {
    let billing = parse_billing(&form.billing)
        .ok_or_else(|| Notification::error("billing must be month, year, or forever"))?;

    PlanForm {
        name: form.name,
        description: form.description,
        price: form.price,
        billing,
        trial_info: form.trial_info,
        features: form.features,
        searches_per_day: form.searches_per_day,
        ai_generations: form.ai_generations,
        exports_per_month: form.exports_per_month,
        results_per_category: form.results_per_category,
        is_popular: form.popular,
        is_active: !form.inactive,
    }
    .into_payload()
    .map_err(|e| Notification::error(e.to_string()))
}

fn parse_billing(raw: &str) -> Option<BillingPeriod> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "month" => Some(BillingPeriod::Month),
        "year" => Some(BillingPeriod::Year),
        "forever" => Some(BillingPeriod::Forever),
        _ => None,
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}
