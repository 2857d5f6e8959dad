use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// avro-decorator - decode Avro Kafka payloads through a schema registry
#[derive(Parser, Debug)]
#[command(name = "avro-decorator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Endpoint file to use instead of ~/.kafka-avro-decorator.properties
    #[arg(long, global = true, value_name = "PATH")]
    pub properties: Option<PathBuf>,

    /// Never ask for a missing schema registry endpoint
    #[arg(long, global = true)]
    pub no_prompt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode one message payload
    Decorate {
        /// Cluster the message was read from (e.g. its ZooKeeper address)
        #[arg(short, long)]
        cluster: String,

        /// Topic the message was read from
        #[arg(short, long)]
        topic: String,

        /// Broker host the message was read from
        #[arg(long, default_value = "")]
        broker: String,

        /// Partition of the message
        #[arg(long, default_value_t = 0)]
        partition: i64,

        /// Offset of the message
        #[arg(long, default_value_t = 0)]
        offset: i64,

        /// Payload is hex text instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// File holding the payload (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Inspect or change stored schema registry endpoints
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the endpoint file and save lock locations
    Path,

    /// List configured clusters
    List,

    /// Store an endpoint: `endpoint` or `endpoint?key=value&...`
    Set {
        /// Cluster identity
        cluster: String,

        /// Endpoint with optional URL-encoded client options
        input: String,
    },

    /// Remove a cluster and its options
    Unset {
        /// Cluster identity
        cluster: String,
    },

    /// Open the endpoint file in $VISUAL / $EDITOR
    Edit,
}
