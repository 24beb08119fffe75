pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8fafc;
      --bg-2: #d1fae5;
      --ink: #0f172a;
      --accent: #10b981;
      --accent-dark: #047857;
      --muted: #64748b;
      --card: #ffffff;
      --line: #e2e8f0;
      --shadow: 0 18px 48px rgba(4, 120, 87, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(160deg, var(--bg-1), #ecfdf5 70%, #f8fafc 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 28px 16px 60px;
    }

    .app {
      width: min(1060px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 22px;
    }

    header.bar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 14px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.7rem, 3.5vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 2px 0 0;
      color: var(--muted);
      font-size: 0.92rem;
    }

    .week-nav {
      display: flex;
      align-items: center;
      gap: 4px;
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 4px;
      box-shadow: 0 4px 14px rgba(15, 23, 42, 0.06);
    }

    .week-nav button {
      border: none;
      background: transparent;
      font-size: 1rem;
      padding: 8px 12px;
      border-radius: 8px;
      cursor: pointer;
      color: var(--muted);
    }

    .week-nav button:hover {
      background: #f1f5f9;
      color: var(--ink);
    }

    #week-label {
      min-width: 170px;
      text-align: center;
      font-weight: 600;
      font-size: 0.95rem;
      user-select: none;
    }

    .panel {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 22px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 22px;
      box-shadow: var(--shadow);
    }

    .card h2 {
      margin: 0 0 4px;
      font-size: 1.15rem;
    }

    #chart {
      width: 100%;
      height: 240px;
      display: block;
      margin-top: 12px;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-bar {
      fill: var(--accent);
    }

    .chart-bar.today {
      fill: var(--accent-dark);
    }

    .chart-grid {
      stroke: #f1f5f9;
    }

    .chart-label {
      fill: #94a3b8;
      font-size: 11px;
      font-weight: 500;
    }

    .chart-value {
      fill: var(--accent-dark);
      font-size: 11px;
      font-weight: 600;
    }

    .insight-card {
      background: linear-gradient(150deg, #ecfdf5, #f0fdfa);
      border-color: #a7f3d0;
      display: flex;
      flex-direction: column;
    }

    .insight-card h2 {
      color: #064e3b;
    }

    #insight-text {
      flex: 1;
      margin: 10px 0 14px;
      font-size: 0.92rem;
      line-height: 1.55;
      color: #065f46;
      white-space: pre-wrap;
      overflow-y: auto;
      max-height: 220px;
      min-height: 110px;
    }

    #insight-text.placeholder {
      font-style: italic;
      color: rgba(6, 95, 70, 0.65);
    }

    #insight-btn {
      border: none;
      border-radius: 12px;
      padding: 12px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      color: white;
      background: var(--accent-dark);
      cursor: pointer;
      transition: transform 120ms ease, opacity 120ms ease;
    }

    #insight-btn:disabled {
      opacity: 0.55;
      cursor: wait;
    }

    #insight-btn:not(:disabled):active {
      transform: scale(0.98);
    }

    .grid-card {
      padding: 0;
      overflow-x: auto;
    }

    .grid {
      min-width: 880px;
      display: grid;
      grid-template-columns: 190px repeat(7, minmax(96px, 1fr));
    }

    .grid .head {
      background: #f8fafc;
      border-bottom: 1px solid var(--line);
      padding: 12px 8px;
      text-align: center;
    }

    .grid .head.corner {
      text-align: left;
      padding-left: 18px;
      font-size: 0.72rem;
      letter-spacing: 0.12em;
      text-transform: uppercase;
      color: var(--muted);
      display: flex;
      align-items: center;
    }

    .day-chip {
      display: inline-flex;
      flex-direction: column;
      align-items: center;
      border-radius: 10px;
      padding: 6px 10px;
    }

    .day-chip .dow {
      font-size: 0.68rem;
      font-weight: 700;
      text-transform: uppercase;
      color: var(--muted);
    }

    .day-chip .dom {
      font-size: 1.05rem;
      font-weight: 700;
    }

    .day-chip.today {
      background: var(--accent);
      color: white;
    }

    .day-chip.today .dow {
      color: rgba(255, 255, 255, 0.85);
    }

    .habit-cell {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 10px 8px 10px 18px;
      border-bottom: 1px solid #f1f5f9;
    }

    .habit-cell .icon {
      width: 34px;
      height: 34px;
      border-radius: 9px;
      background: #ecfdf5;
      border: 1px solid #d1fae5;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 1rem;
      flex-shrink: 0;
    }

    .habit-cell .name {
      font-size: 0.86rem;
      font-weight: 600;
      line-height: 1.2;
    }

    .habit-cell .desc {
      font-size: 0.7rem;
      color: var(--muted);
    }

    .value-cell {
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 8px 4px;
      border-bottom: 1px solid #f1f5f9;
      border-left: 1px solid #f8fafc;
    }

    .value-cell.today {
      background: rgba(16, 185, 129, 0.06);
    }

    .toggle {
      width: 32px;
      height: 32px;
      border-radius: 50%;
      border: none;
      cursor: pointer;
      background: #f1f5f9;
      color: #cbd5e1;
      font-size: 0.9rem;
      transition: all 140ms ease;
    }

    .toggle.on {
      background: var(--accent);
      color: white;
      box-shadow: 0 6px 14px rgba(16, 185, 129, 0.35);
    }

    .stepper {
      display: flex;
      align-items: center;
      gap: 4px;
    }

    .stepper button {
      width: 24px;
      height: 24px;
      border: none;
      border-radius: 6px;
      background: #f1f5f9;
      color: var(--muted);
      font-weight: 700;
      cursor: pointer;
    }

    .stepper button:disabled {
      opacity: 0.35;
      cursor: default;
    }

    .stepper .count {
      min-width: 34px;
      text-align: center;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .stepper .count.full {
      color: var(--accent-dark);
    }

    .free-count {
      display: flex;
      align-items: center;
      gap: 4px;
      background: #f8fafc;
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 2px 6px;
    }

    .free-count input {
      width: 44px;
      border: none;
      background: transparent;
      text-align: center;
      font-family: inherit;
      font-size: 0.85rem;
      font-weight: 600;
      color: var(--ink);
    }

    .free-count input:focus {
      outline: none;
    }

    .free-count .unit {
      font-size: 0.68rem;
      color: var(--muted);
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
      text-align: center;
    }

    .status[data-type="error"] {
      color: #b91c1c;
    }

    .status[data-type="ok"] {
      color: var(--accent-dark);
    }

    footer {
      text-align: center;
      color: #94a3b8;
      font-size: 0.78rem;
    }

    @media (max-width: 820px) {
      .panel {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="bar">
      <div>
        <h1>Weekly Habit Tracker</h1>
        <p class="subtitle">Ibadah &amp; Wellness Log</p>
      </div>
      <div class="week-nav">
        <button id="prev-week" type="button" aria-label="Previous week">&#9664;</button>
        <span id="week-label"></span>
        <button id="next-week" type="button" aria-label="Next week">&#9654;</button>
      </div>
    </header>

    <section class="panel">
      <div class="card">
        <h2>Weekly Consistency</h2>
        <p class="subtitle">Activity completion rate per day</p>
        <svg id="chart" viewBox="0 0 600 240" role="img" aria-label="Completion chart"></svg>
      </div>
      <div class="card insight-card">
        <h2>Spiritual Coach</h2>
        <div id="insight-text" class="placeholder">"Take one step towards Allah, and He will take ten steps towards you."

Get personalized insights for your week.</div>
        <button id="insight-btn" type="button">Get Advice</button>
      </div>
    </section>

    <section class="card grid-card">
      <div class="grid" id="grid"></div>
    </section>

    <div class="status" id="status"></div>

    <footer>Data is stored locally on this device. May your efforts be accepted.</footer>
  </main>

  <script>
    const gridEl = document.getElementById('grid');
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');
    const weekLabelEl = document.getElementById('week-label');
    const insightTextEl = document.getElementById('insight-text');
    const insightBtn = document.getElementById('insight-btn');

    const ICONS = {
      Sun: '☀️',
      BookOpen: '📖',
      Sunrise: '🌅',
      Plus: '➕',
      BookHeart: '📘',
      Moon: '🌙',
      RefreshCcw: '🔄',
      UtensilsCrossed: '🍽️',
      Activity: '🏃'
    };

    const MONTHS = ['January', 'February', 'March', 'April', 'May', 'June',
      'July', 'August', 'September', 'October', 'November', 'December'];

    const pad = (n) => String(n).padStart(2, '0');
    const dateKey = (d) => `${d.getFullYear()}-${pad(d.getMonth() + 1)}-${pad(d.getDate())}`;

    const mondayOf = (d) => {
      const copy = new Date(d.getFullYear(), d.getMonth(), d.getDate());
      copy.setDate(copy.getDate() - ((copy.getDay() + 6) % 7));
      return copy;
    };

    const state = {
      weekStart: mondayOf(new Date()),
      loadingInsight: false
    };

    let catalog = [];
    let week = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const todayKey = () => dateKey(new Date());

    const renderWeekLabel = () => {
      weekLabelEl.textContent = `${MONTHS[state.weekStart.getMonth()]} ${state.weekStart.getFullYear()}`;
    };

    const renderChart = () => {
      if (!week) {
        return;
      }
      const width = 600;
      const height = 240;
      const paddingX = 40;
      const paddingY = 32;
      const top = 18;
      const plotH = height - top - paddingY;
      const slot = (width - paddingX * 2) / 7;
      const barW = Math.min(44, slot - 14);

      let parts = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (100 * i) / 4;
        const y = height - paddingY - (plotH * value) / 100;
        parts += `<line class="chart-grid" x1="${paddingX}" y1="${y}" x2="${width - paddingX}" y2="${y}" />`;
        parts += `<text class="chart-label" x="${paddingX - 8}" y="${y + 4}" text-anchor="end">${value}</text>`;
      }

      week.days.forEach((day, index) => {
        const x = paddingX + index * slot + (slot - barW) / 2;
        const barH = (plotH * day.completion) / 100;
        const y = height - paddingY - barH;
        const cls = day.date === todayKey() ? 'chart-bar today' : 'chart-bar';
        parts += `<rect class="${cls}" x="${x.toFixed(1)}" y="${y.toFixed(1)}" width="${barW.toFixed(1)}" height="${Math.max(barH, 1).toFixed(1)}" rx="5" />`;
        if (day.completion > 0) {
          parts += `<text class="chart-value" x="${(x + barW / 2).toFixed(1)}" y="${(y - 6).toFixed(1)}" text-anchor="middle">${day.completion}</text>`;
        }
        parts += `<text class="chart-label" x="${(x + barW / 2).toFixed(1)}" y="${height - paddingY + 16}" text-anchor="middle">${day.weekday}</text>`;
      });

      chartEl.innerHTML = parts;
    };

    const widgetFor = (habit, day) => {
      const value = day.log[habit.id];
      if (habit.kind === 'BOOLEAN') {
        const on = value === true;
        return `<button class="toggle ${on ? 'on' : ''}" type="button" data-habit="${habit.id}" data-date="${day.date}" data-widget="toggle" data-on="${on}" aria-label="Toggle ${habit.label}">${on ? '✓' : '·'}</button>`;
      }
      const count = typeof value === 'number' ? value : 0;
      if (habit.kind === 'BOUNDED_COUNTER') {
        const full = count >= habit.bound;
        return `<span class="stepper" data-habit="${habit.id}" data-date="${day.date}" data-count="${count}">` +
          `<button type="button" data-widget="dec" ${count <= 0 ? 'disabled' : ''}>-</button>` +
          `<span class="count ${full ? 'full' : ''}">${count}/${habit.bound}</span>` +
          `<button type="button" data-widget="inc" ${full ? 'disabled' : ''}>+</button>` +
          `</span>`;
      }
      return `<span class="free-count">` +
        `<input type="number" min="0" value="${count === 0 ? '' : count}" placeholder="0" data-habit="${habit.id}" data-date="${day.date}" data-widget="free" />` +
        `<span class="unit">${habit.unit || 'x'}</span>` +
        `</span>`;
    };

    const renderGrid = () => {
      if (!week || !catalog.length) {
        return;
      }
      let parts = '<div class="head corner">Habit</div>';
      week.days.forEach((day) => {
        const today = day.date === todayKey();
        parts += `<div class="head"><span class="day-chip ${today ? 'today' : ''}">` +
          `<span class="dow">${day.weekday}</span>` +
          `<span class="dom">${Number(day.date.slice(8))}</span>` +
          `</span></div>`;
      });

      catalog.forEach((habit) => {
        parts += `<div class="habit-cell">` +
          `<span class="icon">${ICONS[habit.icon] || '✨'}</span>` +
          `<span><span class="name">${habit.label}</span><br /><span class="desc">${habit.description || ''}</span></span>` +
          `</div>`;
        week.days.forEach((day) => {
          const today = day.date === todayKey();
          parts += `<div class="value-cell ${today ? 'today' : ''}">${widgetFor(habit, day)}</div>`;
        });
      });

      gridEl.innerHTML = parts;
    };

    const render = () => {
      renderWeekLabel();
      renderChart();
      renderGrid();
    };

    const loadWeek = async () => {
      const res = await fetch(`/api/week?start=${dateKey(state.weekStart)}`);
      if (!res.ok) {
        throw new Error('Unable to load week');
      }
      week = await res.json();
      render();
    };

    const send = async (date, habitId, value) => {
      setStatus('Saving...', '');
      const res = await fetch('/api/log', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date, habit_id: habitId, value })
      });

      if (!res.ok) {
        const body = await res.json().catch(() => null);
        throw new Error(body && body.error ? body.error : 'Request failed');
      }

      const updated = await res.json();
      const day = week.days.find((d) => d.date === updated.date);
      if (day) {
        day.log = updated.log;
        day.completion = updated.completion;
      }
      render();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    gridEl.addEventListener('click', (event) => {
      const target = event.target;
      const widget = target.dataset.widget;
      if (widget === 'toggle') {
        const on = target.dataset.on === 'true';
        send(target.dataset.date, target.dataset.habit, !on)
          .catch((err) => setStatus(err.message, 'error'));
        return;
      }
      if (widget === 'inc' || widget === 'dec') {
        const stepper = target.parentElement;
        const habit = catalog.find((h) => h.id === stepper.dataset.habit);
        const count = Number(stepper.dataset.count);
        const next = widget === 'inc'
          ? Math.min(habit.bound, count + 1)
          : Math.max(0, count - 1);
        send(stepper.dataset.date, habit.id, next)
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    gridEl.addEventListener('change', (event) => {
      const target = event.target;
      if (target.dataset.widget !== 'free') {
        return;
      }
      const parsed = parseInt(target.value, 10);
      const value = Number.isNaN(parsed) ? 0 : Math.max(0, parsed);
      send(target.dataset.date, target.dataset.habit, value)
        .catch((err) => setStatus(err.message, 'error'));
    });

    const requestInsight = async () => {
      if (state.loadingInsight) {
        return;
      }
      state.loadingInsight = true;
      insightBtn.disabled = true;
      insightBtn.textContent = 'Reflecting...';
      try {
        const res = await fetch('/api/insight', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ start: dateKey(state.weekStart) })
        });
        if (!res.ok) {
          throw new Error('Unable to reach the coach');
        }
        const body = await res.json();
        insightTextEl.textContent = body.text;
        insightTextEl.classList.remove('placeholder');
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        state.loadingInsight = false;
        insightBtn.disabled = false;
        insightBtn.textContent = 'Get Advice';
      }
    };

    insightBtn.addEventListener('click', requestInsight);

    document.getElementById('prev-week').addEventListener('click', () => {
      state.weekStart.setDate(state.weekStart.getDate() - 7);
      loadWeek().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-week').addEventListener('click', () => {
      state.weekStart.setDate(state.weekStart.getDate() + 7);
      loadWeek().catch((err) => setStatus(err.message, 'error'));
    });

    const boot = async () => {
      const res = await fetch('/api/catalog');
      if (!res.ok) {
        throw new Error('Unable to load habits');
      }
      catalog = await res.json();
      await loadWeek();
    };

    boot().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
