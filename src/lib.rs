pub mod config;
pub mod convert_pipeline;
pub mod error;
pub mod models;
pub mod routes;
pub mod upload;

use worker::{Context, Env, Request, Response, Result, event};

#[event(fetch)]
async fn fetch(req: Request, env: Env, ctx: Context) -> Result<Response> {
    routes::handle(req, env, ctx).await
}
