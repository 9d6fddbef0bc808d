use crate::api::{employee, work_entry};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, error::InternalError, web};
use anyhow::anyhow;
use serde_json::json;

/// Per-peer limiter allowing `requests_per_min` requests a minute.
pub fn build_limiter(
    requests_per_min: u32,
) -> anyhow::Result<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))?;
    Ok(Governor::new(&cfg))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // malformed bodies answer with the same {"error": ...} shape as service errors
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        InternalError::from_response(err, body).into()
    });

    cfg.app_data(json_config)
        // Directory
        .service(web::resource("/add-employee").route(web::post().to(employee::add_employee)))
        .service(
            web::resource("/delete-employee/{employee_id}")
                .route(web::delete().to(employee::delete_employee)),
        )
        .service(
            web::resource("/get-employee/{employee_id}")
                .route(web::get().to(employee::get_employee)),
        )
        .service(web::resource("/get-employees").route(web::get().to(employee::list_employees)))
        // Timesheet
        .service(web::resource("/clock-in").route(web::post().to(work_entry::clock_in)))
        .service(
            web::resource("/clock-out/{entry_id}").route(web::post().to(work_entry::clock_out)),
        )
        .service(
            web::resource("/entries")
                .route(web::get().to(work_entry::list_entries))
                .route(web::post().to(work_entry::add_custom_entry)),
        )
        .service(
            web::resource("/delete-entry/{entry_id}")
                .route(web::delete().to(work_entry::delete_entry)),
        )
        .service(web::resource("/export").route(web::get().to(work_entry::export_csv)));
}
