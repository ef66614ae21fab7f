use crate::catalog::MoodCatalog;
use chrono::NaiveDate;

pub fn render_index(date: NaiveDate, catalog: &MoodCatalog) -> String {
    let quote = catalog.quote_for(date).unwrap_or_default();
    let options: String = catalog
        .moods
        .iter()
        .map(|mood| {
            format!(
                r#"<option value="{name}">{emoji} {name}</option>"#,
                name = escape_html(&mood.name),
                emoji = escape_html(&mood.emoji),
            )
        })
        .collect();

    INDEX_HTML
        .replace("{{DATE}}", &date.to_string())
        .replace("{{QUOTE}}", &escape_html(quote))
        .replace("{{MOOD_OPTIONS}}", &options)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MoodTracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef0fb;
      --bg-2: #c9c3ef;
      --ink: #2b2a33;
      --accent: #667eea;
      --accent-2: #764ba2;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(63, 52, 120, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f3eaff 60%, #f7f5fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .layout {
      width: min(1120px, 100%);
      margin: 0 auto;
      display: grid;
      grid-template-columns: 300px 1fr;
      gap: 24px;
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 16px;
      align-content: start;
    }

    header {
      grid-column: 1 / -1;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .quote {
      font-style: italic;
      border-left: 4px solid var(--accent);
      padding-left: 14px;
      color: #4d4a5c;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 14px;
      border: 1px solid rgba(63, 52, 120, 0.08);
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8a86a0;
    }

    .stat .value {
      display: block;
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    input, select, textarea {
      width: 100%;
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(63, 52, 120, 0.2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.ghost {
      background: transparent;
      color: #a04040;
      padding: 4px 8px;
    }

    .todo {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .todo label {
      flex: 1;
    }

    .todo input {
      width: auto;
    }

    #chart {
      width: 100%;
      height: 300px;
      display: block;
      background: white;
      border-radius: 16px;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: var(--accent-2);
    }

    .chart-grid {
      stroke: rgba(63, 52, 120, 0.1);
    }

    .chart-label {
      fill: #7a7690;
      font-size: 11px;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    ul {
      margin: 0;
      padding-left: 20px;
    }

    @media (max-width: 800px) {
      .layout {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <div class="layout">
    <header>
      <h1>MoodTracker</h1>
      <p class="quote" id="quote">{{QUOTE}}</p>
    </header>

    <aside class="card">
      <h2>Goal of the day</h2>
      <input id="goal" type="text" placeholder="Set your daily goal" />

      <h2>Todo list</h2>
      <form id="todo-form">
        <input id="todo-task" type="text" placeholder="Add new todo" />
      </form>
      <div id="todos"></div>

      <h2>Hydration</h2>
      <input id="hydration" type="range" min="0" max="12" value="0" />
      <span id="hydration-label">0/8 glasses (0%)</span>

      <h2>Sleep</h2>
      <input id="sleep" type="range" min="0" max="12" value="0" />
      <span id="sleep-label">0 hours</span>
    </aside>

    <main class="card">
      <h2>How are you feeling on {{DATE}}?</h2>
      <form id="mood-form" class="card">
        <select id="mood">{{MOOD_OPTIONS}}</select>
        <textarea id="note" maxlength="200" placeholder="Add a note about your mood (optional)"></textarea>
        <label>Intensity <span id="intensity-label">5</span>/10
          <input id="intensity" type="range" min="1" max="10" value="5" />
        </label>
        <button type="submit">Save today's mood</button>
      </form>
      <div class="status" id="status"></div>

      <h2>Your mood journey</h2>
      <svg id="chart" viewBox="0 0 720 300" aria-label="Mood trend" role="img"></svg>

      <section class="stats">
        <div class="stat"><span class="label">Most common mood</span><span class="value" id="most-common">N/A</span></div>
        <div class="stat"><span class="label">Average intensity</span><span class="value" id="avg-intensity">0/10</span></div>
        <div class="stat"><span class="label">Total entries</span><span class="value" id="total">0</span></div>
      </section>

      <h2 id="songs-title">Song recommendations</h2>
      <ol id="songs"></ol>

      <h2>Recent entries</h2>
      <ul id="recent"></ul>
    </main>
  </div>

  <script>
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const moodEl = document.getElementById('mood');
    const intensityEl = document.getElementById('intensity');
    const todosEl = document.getElementById('todos');
    let moodNames = [];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeText = (text) => String(text).replace(/[&<>"']/g, (ch) => ({
      '&': '&amp;',
      '<': '&lt;',
      '>': '&gt;',
      '"': '&quot;',
      "'": '&#39;'
    })[ch]);

    const api = async (path, options = {}) => {
      const res = await fetch(path, {
        headers: { 'content-type': 'application/json' },
        ...options
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No moods yet</text>';
        return;
      }

      const width = 720;
      const height = 300;
      const left = 90;
      const right = 24;
      const top = 20;
      const bottom = 34;
      const rows = Math.max(moodNames.length - 1, 1);
      const xStep = points.length > 1 ? (width - left - right) / (points.length - 1) : 0;
      const x = (index) => left + index * xStep;
      const y = (ordinal) => top + (ordinal / rows) * (height - top - bottom);

      let grid = '';
      moodNames.forEach((name, ordinal) => {
        grid += `<line class="chart-grid" x1="${left}" y1="${y(ordinal)}" x2="${width - right}" y2="${y(ordinal)}" />`;
        grid += `<text class="chart-label" x="${left - 8}" y="${y(ordinal) + 4}" text-anchor="end">${escapeText(name)}</text>`;
      });

      const plotted = points.filter((point) => point.ordinal !== null);
      const path = plotted
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(points.indexOf(point)).toFixed(2)} ${y(point.ordinal).toFixed(2)}`)
        .join(' ');
      const circles = plotted
        .map((point) => `<circle class="chart-point" cx="${x(points.indexOf(point))}" cy="${y(point.ordinal)}" r="5" />`)
        .join('');
      const labelEvery = points.length > 10 ? Math.ceil(points.length / 10) : 1;
      const xLabels = points
        .map((point, index) => index % labelEvery === 0
          ? `<text class="chart-label" x="${x(index)}" y="${height - 10}" text-anchor="middle">${escapeText(point.date.slice(5))}</text>`
          : '')
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderList = (el, items, render) => {
      el.replaceChildren(...items.map(render));
    };

    const loadStats = async () => {
      const stats = await api('/api/stats');
      renderChart(stats.trend);
      document.getElementById('most-common').textContent =
        `${stats.most_common_emoji || ''} ${stats.most_common_mood}`.trim();
      document.getElementById('avg-intensity').textContent = `${stats.average_intensity.toFixed(1)}/10`;
      document.getElementById('total').textContent = stats.total_entries;
      renderList(document.getElementById('recent'), stats.recent_entries, (entry) => {
        const li = document.createElement('li');
        li.textContent = `${entry.emoji} ${entry.date} - ${entry.mood} (${entry.intensity}/10)${entry.note ? `: ${entry.note}` : ''}`;
        return li;
      });
    };

    const loadSongs = async () => {
      const data = await api(`/api/songs?mood=${encodeURIComponent(moodEl.value)}`);
      document.getElementById('songs-title').textContent = `Songs for a ${data.mood.toLowerCase()} mood`;
      renderList(document.getElementById('songs'), data.songs, (song) => {
        const li = document.createElement('li');
        li.textContent = song;
        return li;
      });
    };

    const loadTodos = async () => {
      const todos = await api('/api/todos');
      renderList(todosEl, todos, (todo, index) => {
        const row = document.createElement('div');
        row.className = 'todo';
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.checked = todo.completed;
        box.addEventListener('change', () => {
          api(`/api/todos/${index}/toggle`, { method: 'POST', body: JSON.stringify({ completed: box.checked }) })
            .catch((err) => setStatus(err.message, 'error'));
        });
        const label = document.createElement('label');
        label.textContent = todo.task;
        const remove = document.createElement('button');
        remove.className = 'ghost';
        remove.type = 'button';
        remove.textContent = 'Delete';
        remove.addEventListener('click', () => {
          api(`/api/todos/${index}`, { method: 'DELETE' })
            .then(loadTodos)
            .catch((err) => setStatus(err.message, 'error'));
        });
        row.append(box, label, remove);
        return row;
      });
    };

    const renderWellness = (data) => {
      document.getElementById('goal').value = data.daily_goal;
      document.getElementById('hydration').value = data.hydration_glasses;
      document.getElementById('sleep').value = data.sleep_hours;
      document.getElementById('hydration-label').textContent =
        `${data.hydration_glasses}/${data.hydration_target} glasses (${Math.round(data.hydration_percent)}%)`;
      const sleepText = {
        great: 'excellent sleep!',
        fair: 'could be better',
        poor: 'you need more sleep!'
      };
      document.getElementById('sleep-label').textContent =
        `${data.sleep_hours} hours - ${sleepText[data.sleep_status]}`;
    };

    const saveWellness = (patch) => {
      api('/api/wellness', { method: 'POST', body: JSON.stringify(patch) })
        .then(renderWellness)
        .catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('mood-form').addEventListener('submit', (event) => {
      event.preventDefault();
      setStatus('Saving...', 'info');
      const note = document.getElementById('note').value;
      api('/api/moods', {
        method: 'POST',
        body: JSON.stringify({ mood: moodEl.value, intensity: Number(intensityEl.value), note: note || null })
      })
        .then(() => {
          document.getElementById('note').value = '';
          setStatus('Mood saved', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
          return loadStats();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('todo-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('todo-task');
      api('/api/todos', { method: 'POST', body: JSON.stringify({ task: input.value }) })
        .then(() => {
          input.value = '';
          return loadTodos();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    intensityEl.addEventListener('input', () => {
      document.getElementById('intensity-label').textContent = intensityEl.value;
    });
    moodEl.addEventListener('change', () => loadSongs().catch((err) => setStatus(err.message, 'error')));
    document.getElementById('goal').addEventListener('change', (event) => saveWellness({ daily_goal: event.target.value }));
    document.getElementById('hydration').addEventListener('change', (event) => saveWellness({ hydration_glasses: Number(event.target.value) }));
    document.getElementById('sleep').addEventListener('change', (event) => saveWellness({ sleep_hours: Number(event.target.value) }));

    const refresh = async () => {
      moodNames = (await api('/api/catalog')).map((mood) => mood.name);
      await Promise.all([loadStats(), loadSongs(), loadTodos(), api('/api/wellness').then(renderWellness)]);
    };

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
