// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use anyhow::Result;
use lambda_invoke::rainbow::rainbow_println;
use lambda_invoke::{args, Defaults, RusotoInvoker, Session, TerminalPrompter};
use std::io;

#[tokio::main]
pub async fn main() -> Result<()> {
    let matches = args::command().get_matches();
    args::get_logging(&matches)?.init();

    let defaults = Defaults::load(matches.value_of("config"))?;

    rainbow_println(include_str!("./banner"));

    let invoker = RusotoInvoker::new(&defaults.invocation_type);
    Session::new(&defaults, TerminalPrompter::new(), invoker, io::stdout())
        .run()
        .await;

    Ok(())
}
