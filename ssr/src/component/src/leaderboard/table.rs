use consts::leaderboard::RESERVED_ROW_LABEL;
use leptos::{ev, prelude::*};
use state::leaderboard::{RowTarget, TableRow};

use super::SignalPort;

#[component]
pub fn LeaderboardTable(port: SignalPort, on_click: Callback<RowTarget>) -> impl IntoView {
    view! {
        <div class="w-full overflow-x-auto">
            <table class="w-full leaderboard-table">
                <thead>
                    <tr class="border-b border-neutral-800 text-neutral-400 text-left">
                        <th class="py-3 px-4">"RANK"</th>
                        <th class="py-3 px-4">"PLAYER"</th>
                        <th class="py-3 px-4 text-right">"WON"</th>
                        <th class="py-3 px-4 text-right">"TRADES"</th>
                        <th class="py-3 px-4 text-right">"WIN RATE"</th>
                        <th class="py-3 px-4 text-right">"VOLUME"</th>
                    </tr>
                </thead>
                <tbody id="leaderboard-body">
                    <ReservedRow on_click=on_click />
                    {move || {
                        port.rows
                            .get()
                            .into_iter()
                            .map(|row| view! { <PlayerRows row=row port=port on_click=on_click /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// The viewer's own row. It is rendered once and never rebuilt.
#[component]
fn ReservedRow(on_click: Callback<RowTarget>) -> impl IntoView {
    view! {
        <tr
            class="user-row bg-pink-500/20 border-l-4 border-pink-500"
            on:click=move |_| on_click.run(RowTarget::Reserved)
        >
            <td data-label="RANK" class="py-4 px-4">"[--]"</td>
            <td data-label="PLAYER" class="py-4 px-4 font-medium">{RESERVED_ROW_LABEL}</td>
            <td data-label="WON" class="py-4 px-4 text-right">"0.00 "<span class="coin-icon"></span></td>
            <td data-label="TRADES" class="py-4 px-4 text-right">"0"</td>
            <td data-label="WIN RATE" class="py-4 px-4 text-right">"0.00%"</td>
            <td data-label="VOLUME" class="py-4 px-4 text-right">"0.00 "<span class="coin-icon"></span></td>
        </tr>
    }
}

fn row_class(flash: bool, expanded: bool) -> String {
    let mut class = String::from("border-b border-neutral-800 cursor-pointer hover:bg-neutral-900/50 transition-colors");
    if flash {
        class.push_str(" flash-update");
    }
    if expanded {
        class.push_str(" active");
    }
    class
}

#[component]
fn PlayerRows(row: TableRow, port: SignalPort, on_click: Callback<RowTarget>) -> impl IntoView {
    let TableRow {
        player,
        rank,
        won,
        trades,
        win_rate,
        volume,
        wallet,
        joined,
        flash,
        expanded: _,
    } = row;

    let expanded = {
        let player = player.clone();
        Signal::derive(move || port.is_expanded(&player))
    };
    let summary_target = RowTarget::Summary(player.clone());
    let detail_target = RowTarget::Detail(player.clone());
    let challenge_target = RowTarget::Challenge(player.clone());
    let data_player = player.clone();

    view! {
        <tr
            data-player=data_player
            class=move || row_class(flash, expanded.get())
            on:click=move |_| on_click.run(summary_target.clone())
        >
            <td data-label="RANK" class="py-4 px-4">{rank}</td>
            <td data-label="PLAYER" class="py-4 px-4 font-medium">{player}</td>
            <td data-label="WON" class="py-4 px-4 text-right">{won}" "<span class="coin-icon"></span></td>
            <td data-label="TRADES" class="py-4 px-4 text-right">{trades}</td>
            <td data-label="WIN RATE" class="py-4 px-4 text-right">{win_rate}</td>
            <td data-label="VOLUME" class="py-4 px-4 text-right">{volume}" "<span class="coin-icon"></span></td>
        </tr>
        <tr
            class=move || if expanded.get() { "player-details-row open" } else { "player-details-row" }
            on:click=move |_| on_click.run(detail_target.clone())
        >
            <td colspan="6">
                <div class="player-details-content">
                    <div><strong>"Wallet: "</strong>{wallet}</div>
                    <div><strong>"Joined: "</strong>{joined}</div>
                    <button
                        class="challenge-btn"
                        on:click=move |e: ev::MouseEvent| {
                            e.stop_propagation();
                            on_click.run(challenge_target.clone());
                        }
                    >
                        "Challenge"
                    </button>
                </div>
            </td>
        </tr>
    }
}
