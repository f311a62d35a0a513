use rocket::{config::Config as RocketCfg, Build, Rocket, Route};

use loodb_core::{entities::*, repositories::UserRepo as _};

pub mod api;
mod guards;
mod sqlite;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    // Accounts listed here are promoted to admins at startup.
    pub bootstrap_admins: Vec<EmailAddress>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

fn promote_bootstrap_admins(db: &sqlite::Connections, emails: &[EmailAddress]) {
    let db = db.exclusive().unwrap();
    for email in emails {
        match db.try_get_user_by_email(email) {
            Ok(Some(mut user)) => {
                if user.role < Role::Admin {
                    user.role = Role::Admin;
                    user.updated_at = Some(Timestamp::now());
                    if let Err(err) = db.update_user(&user) {
                        error!("Failed to promote {email} to admin: {err}");
                    } else {
                        info!("Promoted {email} to admin");
                    }
                }
            }
            Ok(None) => {
                warn!("Cannot promote unknown account {email} to admin");
            }
            Err(err) => {
                error!("Failed to load account {email}: {err}");
            }
        }
    }
}

pub(crate) fn rocket_instance(options: InstanceOptions, db: sqlite::Connections) -> Rocket<Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    if !cfg.bootstrap_admins.is_empty() {
        info!("Promoting bootstrap admins...");
        promote_bootstrap_admins(&db, &cfg.bootstrap_admins);
    }

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(cfg).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };

    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
