use anyhow::Result;
use clap::Parser;
use kube::Client;
use tracing::info;

use kube_dive::{load_config, Dive, DiveError, KubeGateway};

/// Dive after a pod: the node it runs on, its owning workload, its
/// containers and the sibling pods sharing the node.
#[derive(Parser, Debug)]
#[command(name = "kube-dive", version, about)]
struct Args {
    /// Name of the pod to dive after
    pod: String,

    /// Restrict the search to one namespace (faster in big clusters)
    #[arg(short, long)]
    namespace: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let cfg = load_config();
    let scope = args.namespace.or(cfg.namespace);
    info!("namespace scope = {:?}", scope);

    let client = Client::try_default()
        .await
        .map_err(|e| DiveError::Configuration(e.to_string()))?;
    let gateway = KubeGateway::new(client);

    println!("Diving after {}:", args.pod);
    println!();

    let lines = Dive::new(&gateway)
        .lines(&args.pod, scope.as_deref())
        .await?;
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
