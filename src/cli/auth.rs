//! Session commands: login, logout, status

use clap::Args;

use crate::AdminContext;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// The shared admin password
    pub password: String,
}

pub async fn login(ctx: &AdminContext, args: LoginArgs) -> anyhow::Result<()> {
    if ctx.auth.login(&args.password).await {
        println!("login ok");
        Ok(())
    } else {
        anyhow::bail!("login failed: the password was not accepted")
    }
}

pub async fn logout(ctx: &AdminContext) -> anyhow::Result<()> {
    ctx.auth.logout().await;
    println!("logged out");
    Ok(())
}

pub async fn status(ctx: &AdminContext) -> anyhow::Result<()> {
    let valid = ctx.auth.resume().await;
    println!("session: {}", ctx.auth.status().await);
    if !valid && ctx.client.session().get().await.is_some() {
        println!("a stored credential exists but did not validate");
    }
    Ok(())
}
