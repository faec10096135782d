use crate::{
    api::{benefits, incentive, leave, overtime, shift},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        // The builder rejects a zero burst, so a zero rate floors to the
        // tightest valid limiter instead of panicking at startup.
        let requests_per_min = requests_per_min.max(1);
        let per_ms = 60_000 / requests_per_min as u64;
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = build_limiter(config.rate_login_per_min);
    let register_limiter = build_limiter(config.rate_register_per_min);

    // Session gate: login and register are rate limited, /protected requires a
    // bearer token. The resource routes below are not auth-gated.
    cfg.service(
        web::resource("/login")
            .wrap(login_limiter)
            .route(web::post().to(handlers::login)),
    )
    .service(
        web::resource("/register")
            .wrap(register_limiter)
            .route(web::post().to(handlers::register)),
    )
    .service(
        web::resource("/protected")
            .wrap(from_fn(auth_middleware))
            .route(web::get().to(handlers::protected)),
    );

    // Resource services, one scope per collection
    cfg.service(
        web::scope("/overtimes")
            .service(
                web::resource("")
                    .route(web::get().to(overtime::list_overtimes))
                    .route(web::post().to(overtime::create_overtime)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(overtime::update_overtime))
                    .route(web::delete().to(overtime::delete_overtime)),
            ),
    )
    .service(
        web::scope("/shifts")
            .service(
                web::resource("")
                    .route(web::get().to(shift::list_shifts))
                    .route(web::post().to(shift::create_shift)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(shift::update_shift))
                    .route(web::delete().to(shift::delete_shift)),
            ),
    )
    .service(
        web::scope("/incentives")
            .service(
                web::resource("")
                    .route(web::get().to(incentive::list_incentives))
                    .route(web::post().to(incentive::create_incentive)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(incentive::update_incentive))
                    .route(web::delete().to(incentive::delete_incentive)),
            ),
    )
    .service(
        web::scope("/benefits")
            .service(
                web::resource("")
                    .route(web::get().to(benefits::list_benefits))
                    .route(web::post().to(benefits::create_benefits)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(benefits::update_benefits))
                    .route(web::delete().to(benefits::delete_benefits)),
            ),
    )
    .service(
        web::scope("/leaves")
            .service(
                web::resource("")
                    .route(web::get().to(leave::list_leaves))
                    .route(web::post().to(leave::create_leave)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(leave::get_leave))
                    .route(web::put().to(leave::update_leave))
                    .route(web::delete().to(leave::delete_leave)),
            ),
    );
}
