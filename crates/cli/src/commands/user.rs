//! User-scope pages: auth, dashboard, search, and the public pages.

use insights_snap_client::{ApiClient, Notification};
use insights_snap_core::{PricingPlan, Scope, Session};

use super::{CliError, CommandOutcome, report_failure, require_session};

/// The signup page.
pub async fn register(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> CommandOutcome {
    match client.register(name, email, password).await {
        Ok(resp) => {
            if let Err(e) = client.sessions().set(Scope::User, &Session::from(resp)) {
                tracing::warn!(error = %e, "account created but session not persisted");
            }
            println!("{}", Notification::success("Account created successfully!"));
            println!("-> {}", Scope::User.home_route());
            CommandOutcome::Done
        }
        Err(err) => {
            println!("{}", Notification::for_error(&err, "Registration failed"));
            CommandOutcome::Failed
        }
    }
}

/// The login page.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> CommandOutcome {
    match client.login(email, password).await {
        Ok(resp) => {
            if let Err(e) = client.sessions().set(Scope::User, &Session::from(resp)) {
                tracing::warn!(error = %e, "logged in but session not persisted");
            }
            println!("{}", Notification::success("Logged in successfully!"));
            println!("-> {}", Scope::User.home_route());
            CommandOutcome::Done
        }
        Err(err) => {
            println!("{}", Notification::for_error(&err, "Login failed"));
            CommandOutcome::Failed
        }
    }
}

/// The navbar's logout action.
pub fn logout(client: &ApiClient) -> Result<CommandOutcome, CliError> {
    client.sessions().clear(Scope::User)?;
    println!("signed out");
    println!("-> /");
    Ok(CommandOutcome::Done)
}

/// The profile section of the dashboard.
pub async fn me(client: &ApiClient) -> CommandOutcome {
    if require_session(client, Scope::User).is_none() {
        return CommandOutcome::Failed;
    }
    match client.me().await {
        Ok(profile) => {
            println!(
                "{} <{}> - plan: {}, role: {}",
                profile.name, profile.email, profile.plan, profile.role
            );
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::User, &err, "Failed to load profile");
            CommandOutcome::Failed
        }
    }
}

/// The credits panel of the dashboard.
pub async fn credits(client: &ApiClient) -> CommandOutcome {
    if require_session(client, Scope::User).is_none() {
        return CommandOutcome::Failed;
    }
    match client.credits().await {
        Ok(credits) => {
            println!(
                "searches: {} left ({} used today)",
                credits.searches_remaining, credits.searches_used_today
            );
            println!(
                "AI generations: {} left ({} used today)",
                credits.ai_generations_remaining, credits.ai_generations_used_today
            );
            println!(
                "exports: {} left ({} used this month)",
                credits.exports_remaining, credits.exports_used_this_month
            );
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::User, &err, "Failed to load credits");
            CommandOutcome::Failed
        }
    }
}

/// The pricing page's upgrade action.
pub async fn upgrade(client: &ApiClient, plan_id: &str) -> CommandOutcome {
    if require_session(client, Scope::User).is_none() {
        return CommandOutcome::Failed;
    }
    match client.upgrade_plan(plan_id).await {
        Ok(resp) => {
            println!(
                "{}",
                Notification::success(format!("Upgraded to {}", resp.plan))
            );
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::User, &err, "Upgrade failed");
            CommandOutcome::Failed
        }
    }
}

/// The dashboard search form.
pub async fn search(client: &ApiClient, query: &str) -> CommandOutcome {
    if require_session(client, Scope::User).is_none() {
        return CommandOutcome::Failed;
    }
    match client.search(query).await {
        Ok(result) => {
            println!("pain points ({}):", result.pain_points.len());
            for item in &result.pain_points {
                println!("  [{}] {}", item.platform, item.content);
            }
            println!("trending ideas ({}):", result.trending_ideas.len());
            for item in &result.trending_ideas {
                println!("  [{}] {}", item.platform, item.content);
            }
            println!("content ideas ({}):", result.content_ideas.len());
            for idea in &result.content_ideas {
                println!("  {} - {}", idea.title, idea.platforms.join(", "));
            }
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::User, &err, "Search failed");
            CommandOutcome::Failed
        }
    }
}

/// The export button on a search result.
pub async fn export(client: &ApiClient, search_id: &str, format: &str) -> CommandOutcome {
    if require_session(client, Scope::User).is_none() {
        return CommandOutcome::Failed;
    }
    match client.export(search_id, format).await {
        Ok(resp) => {
            println!("{}", Notification::success("Export ready"));
            println!("download: {}", resp.download_url);
            CommandOutcome::Done
        }
        Err(err) => {
            report_failure(client, Scope::User, &err, "Export failed");
            CommandOutcome::Failed
        }
    }
}

/// The public pricing page.
pub async fn public_plans(client: &ApiClient) -> CommandOutcome {
    match client.public_plans().await {
        Ok(plans) => {
            print_plans(&plans);
            CommandOutcome::Done
        }
        Err(err) => {
            println!("{}", Notification::for_error(&err, "Failed to fetch pricing plans"));
            CommandOutcome::Failed
        }
    }
}

/// SEO metadata lookup used by the marketing pages.
pub async fn page_seo(client: &ApiClient, page: &str) -> CommandOutcome {
    match client.page_seo(page).await {
        Ok(seo) => {
            println!("{}: {}", seo.page, seo.title);
            println!("  {}", seo.description);
            println!("  canonical: {}", seo.canonical);
            if !seo.keywords.is_empty() {
                println!("  keywords: {}", seo.keywords.join(", "));
            }
            CommandOutcome::Done
        }
        Err(err) => {
            println!("{}", Notification::for_error(&err, "Failed to fetch SEO settings"));
            CommandOutcome::Failed
        }
    }
}

/// Shared plan listing renderer (public page and admin console).
pub(crate) fn print_plans(plans: &[PricingPlan]) {
    for plan in plans {
        let popular = if plan.is_popular { " (popular)" } else { "" };
        let active = if plan.is_active { "" } else { " [inactive]" };
        println!(
            "{} - ${}/{}{popular}{active}",
            plan.name, plan.price, plan.billing
        );
        println!("  id: {}", plan.id);
        for feature in &plan.features {
            println!("  - {feature}");
        }
    }
}
