use std::process::ExitCode;

use play_listings::action::cli::process_args;

fn main() -> ExitCode {
    match process_args() {
        Ok(output) if output.is_success() => {
            log::info!("程式執行完成，共處理 {} 個語言目錄", output.processed.len());
            println!("擷取完成！共處理 {} 個語言目錄", output.processed.len());
            ExitCode::SUCCESS
        }
        Ok(output) => {
            for failure in &output.failures {
                eprintln!("{}：{}", failure.directory.display(), failure.error);
            }
            eprintln!(
                "擷取未完全成功：成功 {} 個，失敗 {} 個",
                output.processed.len(),
                output.failures.len()
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("擷取失敗：{}", err);
            eprintln!("錯誤：{}", err);
            ExitCode::FAILURE
        }
    }
}
