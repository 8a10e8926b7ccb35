fn main() {
    if let Err(e) = audio_detect_lib::run() {
        eprintln!("audio-detect: {:#}", e);
        std::process::exit(1);
    }
}
