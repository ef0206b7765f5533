use tracing::warn;

use super::Names;
use crate::generate::File;

pub(super) fn add_saga(out: &mut Vec<File>, names: &Names, fetch_fn: Option<&str>) {
    if fetch_fn.is_none() {
        warn!(component = %names.component, "no GET endpoint, saga reports failure");
    }
    out.push(File {
        path: names.saga_path(),
        content: mk_saga(names, fetch_fn),
    });
}

fn mk_saga(names: &Names, fetch_fn: Option<&str>) -> String {
    let c = &names.component;
    let mut s = String::new();
    cpf!(s, "import {{ call, put, takeLatest }} from 'redux-saga/effects';");
    cpf!(
        s,
        "import {{ {}, {}, {} }} from '../slices/{}Slice';",
        names.requested_action(),
        names.succeeded_action(),
        names.failed_action(),
        c
    );
    if let Some(fetch_fn) = fetch_fn {
        cpf!(s, "import {{ {} }} from '../api/{}.api';", fetch_fn, c);
    }
    cpf!(s, "import {{ {0} }} from '../types/{0}.types';", c);
    cpf!(s, "");
    cpf!(s, "function* fetch{}Saga() {{", c);
    match fetch_fn {
        Some(fetch_fn) => {
            cpf!(s, "    try {{");
            cpf!(s, "        const data: {}[] = yield call({});", c, fetch_fn);
            cpf!(s, "        yield put({}(data));", names.succeeded_action());
            cpf!(s, "    }} catch (error) {{");
            cpf!(
                s,
                "        yield put({}(error instanceof Error ? error.message : String(error)));",
                names.failed_action()
            );
            cpf!(s, "    }}");
        }
        None => {
            cpf!(s, "    yield put({}('no GET endpoint for {}'));", names.failed_action(), c);
        }
    }
    cpf!(s, "}}");
    cpf!(s, "");
    cpf!(s, "export function* watchFetch{}() {{", c);
    cpf!(s, "    yield takeLatest({}.type, fetch{}Saga);", names.requested_action(), c);
    cpf!(s, "}}");
    s
}
