use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px, size,
};

use spark_showcase::{
    ShowcaseAssets, assets,
    config::{DEFAULT_CONFIG_FILE, ShowcaseConfig},
    theme::ThemeExt,
    views::ShowcaseView,
};

actions!(window, [TabNext, TabPrev]);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ShowcaseConfig::load(DEFAULT_CONFIG_FILE).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring config file");
        ShowcaseConfig::default()
    });

    let theme = config.load_theme()?;

    tracing::info!(appearance = ?config.appearance, theme = %theme.name, "starting showcase");

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![ShowcaseAssets])
        .run(move |cx: &mut App| {
            spark_showcase::init(cx);
            cx.set_theme(theme);

            let window_config = &config.window;
            let bounds = Bounds::centered(
                None,
                size(px(window_config.width), px(window_config.height)),
                cx,
            );
            let appearance = config.appearance;

            let opened = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        title: Some(window_config.title.clone().into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |window, cx| cx.new(|cx| ShowcaseView::new(appearance, window, cx)),
            );

            match opened {
                Ok(_) => tracing::info!(
                    width = window_config.width,
                    height = window_config.height,
                    "showcase window opened"
                ),
                Err(err) => {
                    tracing::error!(%err, "failed to open the showcase window");
                    cx.quit();
                    return;
                }
            }

            init_tab_indexing_actions(cx);

            cx.activate(true);
        });

    Ok(())
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([
        KeyBinding::new("tab", TabNext, None),
        KeyBinding::new("shift-tab", TabPrev, None),
    ]);
}
