use worker::{Context, Env, Request, Response, Result, RouteContext, Router};

use crate::config::AppConfig;
use crate::convert_pipeline;
use crate::error::ApiError;
use crate::models::XLSX_RESPONSE_HEADERS;
use crate::upload;

pub async fn handle(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    let config = AppConfig::from_env(&env);

    Router::with_data(config)
        .post_async("/", convert_route)
        .run(req, env)
        .await
}

async fn convert_route(mut req: Request, ctx: RouteContext<AppConfig>) -> Result<Response> {
    match convert_response(&mut req, &ctx.data).await {
        Ok(response) => Ok(response),
        Err(error) => {
            worker::console_log!("rejected upload: {error}");
            error.into_response()
        }
    }
}

async fn convert_response(req: &mut Request, config: &AppConfig) -> Result<Response, ApiError> {
    let pdf_bytes = upload::read_pdf_upload(req, config.max_upload_bytes).await?;
    let xlsx = convert_pipeline::convert_pdf_bytes(&pdf_bytes, &config.convert)?;
    xlsx_response(xlsx)
}

fn xlsx_response(xlsx: Vec<u8>) -> Result<Response, ApiError> {
    let mut response = Response::from_bytes(xlsx)?;
    for (name, value) in XLSX_RESPONSE_HEADERS {
        response.headers_mut().set(name, value)?;
    }
    Ok(response)
}
