//! Converts StardewXNBHack sprite fonts into documents xnbcli can pack.

use spritefont_bridge::core;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args).await {
        core::platform::handle_error(error);
    }
}
