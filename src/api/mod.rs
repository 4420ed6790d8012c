pub mod clients;
pub mod error;
pub mod forms;
pub mod health;
pub mod home;
pub mod job_assignments;
pub mod resource;
pub mod workers;

use actix_web::web::ServiceConfig;

use self::clients::Clients;
use self::job_assignments::JobAssignments;
use self::resource::resource_config;
use self::workers::Workers;

/// Every route the console serves
pub fn routes(config: &mut ServiceConfig) {
    config
        .configure(home::home_config)
        .configure(health::health_config)
        .configure(resource_config::<Workers>)
        .configure(resource_config::<Clients>)
        .configure(resource_config::<JobAssignments>);
}
