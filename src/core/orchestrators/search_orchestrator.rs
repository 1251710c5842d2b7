use std::sync::{Arc, Mutex};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::core::dork_builder::generate_dorks;
use crate::core::interfaces::adapters::HttpTransport;
use crate::core::models::{
    FetchOutcome, FinderError, Person, SearchEngine, SearchFailure, SearchResult, SearchSettings,
};
use crate::core::people_databases::people_database_results;
use crate::global_constants;
use crate::presentation::console_output;

pub struct SearchOrchestrator {
    http_transport: Arc<dyn HttpTransport>,
    settings: SearchSettings,
    results: Arc<Mutex<Vec<SearchResult>>>,
}

impl SearchOrchestrator {
    pub fn new(http_transport: Arc<dyn HttpTransport>, settings: SearchSettings) -> Self {
        Self {
            http_transport,
            settings,
            results: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Runs every dork for `person` against `engine`, then records the
    /// people-database links. Results accumulate across calls.
    pub async fn run_search(
        &self,
        person: &Person,
        engine: SearchEngine,
        advanced: bool,
    ) -> Result<(), FinderError> {
        if !person.is_complete() {
            log::error!(
                "{} Refusing to search without both names",
                global_constants::LOG_TAG_ORCHESTRATOR
            );
            console_output::print_error(FinderError::MissingName);
            return Err(FinderError::MissingName);
        }

        println!();
        console_output::print_success(format!(
            "Starting OSINT search for {}",
            person.full_name()
        ));
        if advanced {
            console_output::print_warning(global_constants::USER_MESSAGE_ADVANCED_MODE);
        }

        let dorks = generate_dorks(person, advanced);
        console_output::print_info(format!("Generated {} search queries", dorks.len()));

        self.dispatch_dorks(engine, dorks).await;
        self.record_people_databases(person);

        log::info!(
            "{} Search for {} finished with {} results",
            global_constants::LOG_TAG_ORCHESTRATOR,
            person.full_name(),
            self.result_count()
        );

        Ok(())
    }

    async fn dispatch_dorks(&self, engine: SearchEngine, dorks: Vec<String>) {
        let permits = Arc::new(Semaphore::new(self.settings.max_concurrent_requests.max(1)));
        let submit_delay = self.settings.submit_delay();
        let mut workers = JoinSet::new();

        for dork in dorks {
            let permits = Arc::clone(&permits);
            let http_transport = Arc::clone(&self.http_transport);
            let results = Arc::clone(&self.results);

            workers.spawn(async move {
                let _permit = permits.acquire_owned().await.ok();
                let outcome = search_dork(http_transport.as_ref(), engine, &dork).await;
                record_outcome(&results, outcome);
            });

            tokio::time::sleep(submit_delay).await;
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(error) = joined {
                log::error!(
                    "{} Search worker ended abnormally: {}",
                    global_constants::LOG_TAG_ORCHESTRATOR,
                    error
                );
            }
        }
    }

    fn record_people_databases(&self, person: &Person) {
        println!();
        console_output::print_success(global_constants::USER_MESSAGE_SEARCHING_DATABASES);

        for result in people_database_results(person) {
            console_output::print_info(format!("Checking {}: {}", result.label, result.url));
            append_result(&self.results, result);
        }
    }

    pub fn results(&self) -> Vec<SearchResult> {
        match self.results.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn result_count(&self) -> usize {
        match self.results.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

/// Requests one dork and classifies the response. Only a 200 counts as a hit.
pub async fn search_dork(
    http_transport: &dyn HttpTransport,
    engine: SearchEngine,
    dork: &str,
) -> FetchOutcome {
    let url = engine.construct_search_url(dork);
    console_output::print_search_started(engine, dork);
    log::debug!("{} GET {}", global_constants::LOG_TAG_ORCHESTRATOR, url);

    match http_transport.fetch_status(&url).await {
        Ok(global_constants::HTTP_STATUS_OK) => {
            FetchOutcome::Found(SearchResult::new(engine.to_string(), dork, url))
        }
        Ok(status) => FetchOutcome::Failed(SearchFailure::UnexpectedStatus { status, url }),
        Err(error) => FetchOutcome::Failed(SearchFailure::Transport {
            engine,
            dork: dork.to_string(),
            message: format!("{:#}", error),
        }),
    }
}

fn record_outcome(results: &Mutex<Vec<SearchResult>>, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Found(result) => append_result(results, result),
        FetchOutcome::Failed(failure) => {
            log::warn!("{} {}", global_constants::LOG_TAG_ORCHESTRATOR, failure);
            console_output::print_error(failure);
        }
    }
}

fn append_result(results: &Mutex<Vec<SearchResult>>, result: SearchResult) {
    match results.lock() {
        Ok(mut guard) => guard.push(result),
        Err(poisoned) => poisoned.into_inner().push(result),
    }
}
