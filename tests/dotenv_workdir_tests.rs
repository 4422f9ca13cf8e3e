// Kept in its own test binary: it changes the process working directory.

use preflight_lib::config;
use std::env;
use std::fs;

#[test]
fn test_load_settings_reads_dotenv_from_working_directory() {
    let original_dir = env::current_dir().expect("Failed to read working directory");
    let workdir = tempfile::tempdir().expect("Failed to create temp dir");
    env::set_current_dir(workdir.path()).expect("Failed to enter temp dir");

    temp_env::with_vars(
        [
            ("GEMINI_MODEL", Some("from-process")),
            ("KAFKA_TOPIC", None),
            ("PINECONE_INDEX_NAME", None),
        ],
        || {
            // No .env yet: ignored, process environment and defaults apply.
            let settings = config::load_settings();
            assert_eq!(settings.gemini.model, "from-process");
            assert_eq!(settings.kafka.topic, "");
            assert_eq!(settings.kafka.bootstrap_servers, "localhost:9092");

            fs::write(
                workdir.path().join(".env"),
                "GEMINI_MODEL=from-file\nKAFKA_TOPIC=file-topic\nPINECONE_INDEX_NAME=yelp-reviews\n",
            )
            .expect("Failed to write .env");

            let settings = config::load_settings();
            assert_eq!(settings.gemini.model, "from-process");
            assert_eq!(settings.kafka.topic, "file-topic");
            assert_eq!(settings.pinecone.index_name, "yelp-reviews");
        },
    );

    env::set_current_dir(original_dir).expect("Failed to restore working directory");
}
