use diesel::{
    MysqlConnection,
    r2d2::{ConnectionManager, Pool},
};
use dotenvy::dotenv;
use env_logger::Env;
use lifeline::alerts::{
    AlertDispatcher, MysqlDirectory, NotificationChannel, SosOrchestrator, TwilioChannel,
};
use lifeline::http::{self, AlertState};
use lifeline::location::{LocationStore, MemoryLocationStore};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let manager = ConnectionManager::<MysqlConnection>::new(database_url);
    let pool = Pool::builder()
        .test_on_check_out(true)
        .build(manager)
        .expect("Could not build connection pool");

    let channel: Arc<dyn NotificationChannel> =
        Arc::new(TwilioChannel::from_env().expect("SID, AUTH_TOKEN and PHONE_NUMBER must be set"));
    let locations: Arc<dyn LocationStore> = Arc::new(MemoryLocationStore::new());

    let orchestrator = Arc::new(SosOrchestrator::new(
        Arc::new(MysqlDirectory::new(pool.clone())),
        AlertDispatcher::new(channel),
        Arc::clone(&locations),
    ));

    let state = AlertState {
        orchestrator,
        locations,
    };

    http::listen(pool, state).await;
}
