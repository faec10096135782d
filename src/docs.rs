use crate::api::benefits::BenefitsInput;
use crate::api::incentive::IncentiveInput;
use crate::api::leave::LeaveInput;
use crate::api::overtime::OvertimeInput;
use crate::api::shift::ShiftInput;
use crate::model::benefits::Benefits;
use crate::model::credential::Credential;
use crate::model::incentive::Incentive;
use crate::model::leave::{Leave, LeaveStatus, LeaveType};
use crate::model::overtime::Overtime;
use crate::model::shift::{Shift, ShiftType};
use crate::models::{LoginReqDto, LoginResponse, RegisterReq};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital HRM API",
        version = "1.0.0",
        description = r#"
## Hospital HR Administration API

REST backend for hospital employee administration: overtime, shifts,
incentives, benefits and leave requests, each a plain CRUD collection with
server-derived salary fields.

### Derived values
- Overtime total: `base + hours x (base / 264) x 1.5`
- Shift salary: `dailyRate(position) x (1 + differential / 100)`
- Incentive total: `salary + rating x 1000 x multiplier(position)`

### Security
`/login` issues a JWT bearer token; `/protected` verifies it. Resource
endpoints are open to any caller, matching the legacy deployment.
"#,
    ),
    paths(
        crate::api::overtime::list_overtimes,
        crate::api::overtime::create_overtime,
        crate::api::overtime::update_overtime,
        crate::api::overtime::delete_overtime,

        crate::api::shift::list_shifts,
        crate::api::shift::create_shift,
        crate::api::shift::update_shift,
        crate::api::shift::delete_shift,

        crate::api::incentive::list_incentives,
        crate::api::incentive::create_incentive,
        crate::api::incentive::update_incentive,
        crate::api::incentive::delete_incentive,

        crate::api::benefits::list_benefits,
        crate::api::benefits::create_benefits,
        crate::api::benefits::update_benefits,
        crate::api::benefits::delete_benefits,

        crate::api::leave::list_leaves,
        crate::api::leave::get_leave,
        crate::api::leave::create_leave,
        crate::api::leave::update_leave,
        crate::api::leave::delete_leave,
    ),
    components(
        schemas(
            Overtime,
            OvertimeInput,
            Shift,
            ShiftInput,
            ShiftType,
            Incentive,
            IncentiveInput,
            Benefits,
            BenefitsInput,
            Leave,
            LeaveInput,
            LeaveType,
            LeaveStatus,
            Credential,
            RegisterReq,
            LoginReqDto,
            LoginResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Overtime", description = "Overtime record management"),
        (name = "Shift", description = "Shift assignment management"),
        (name = "Incentive", description = "Incentive award management"),
        (name = "Benefits", description = "Benefit enrollment management"),
        (name = "Leave", description = "Leave request management"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
