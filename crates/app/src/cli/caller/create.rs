use clap::Args;
use showcase_app::{
    auth::{CallersService, PgCallersService},
    database,
};

#[derive(Debug, Args)]
pub(crate) struct CreateCallerArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Contact address recorded as the submitter of this caller's products
    #[arg(long)]
    contact_address: Option<String>,

    /// Allow this caller to moderate products
    #[arg(long)]
    admin: bool,
}

pub(crate) async fn run(args: CreateCallerArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCallersService::new(pool);

    let issued = service
        .register(args.contact_address, args.admin)
        .await
        .map_err(|error| format!("failed to create caller: {error}"))?;

    println!("caller_id: {}", issued.caller.id);
    println!(
        "contact_address: {}",
        issued.caller.contact_address.as_deref().unwrap_or("none")
    );
    println!("admin: {}", issued.caller.is_admin);
    println!("created_at: {}", issued.caller.created_at);
    println!("caller_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
